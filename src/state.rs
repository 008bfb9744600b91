use crate::db::Store;

/// Process-scoped state handed to every request handler. The connection
/// pool inside `Store` is the only thing shared across requests; no other
/// mutable state exists between them.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }
}

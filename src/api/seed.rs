use axum::{extract::State, response::Html};
use std::sync::Arc;

use super::ApiError;
use crate::state::AppState;

/// One-shot sample loader for a fresh deployment. Not idempotent: every
/// call inserts the whole batch again.
pub async fn load_samples(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let inserted = state.store().seed_samples().await?;

    Ok(Html(format!(
        "<h1>Semilla cargada: {inserted} animes de ejemplo insertados</h1>"
    )))
}

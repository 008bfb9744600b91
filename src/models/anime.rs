use serde::{Deserialize, Serialize};

/// A stored catalog entry, id assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anime {
    pub id: i32,
    pub name: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub volume_count: Option<i32>,
    pub comments: Option<String>,
}

/// The five writable fields of an entry. Used for both inserts and full
/// overwrites; a `None` stores as NULL either way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimeDraft {
    pub name: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub volume_count: Option<i32>,
    pub comments: Option<String>,
}

use serde::{Deserialize, Serialize};

use crate::models::anime::{Anime, AnimeDraft};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeDto {
    pub id: i32,
    pub name: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub volume_count: Option<i32>,
    pub comments: Option<String>,
}

impl From<Anime> for AnimeDto {
    fn from(anime: Anime) -> Self {
        Self {
            id: anime.id,
            name: anime.name,
            start_year: anime.start_year,
            end_year: anime.end_year,
            volume_count: anime.volume_count,
            comments: anime.comments,
        }
    }
}

/// Body shared by create and update. Every field is optional and an
/// omitted field stores as NULL; updates overwrite, they never merge.
/// A provided JSON null and an absent key are treated the same.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAnimeRequest {
    pub name: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub volume_count: Option<i32>,
    pub comments: Option<String>,
}

impl From<SaveAnimeRequest> for AnimeDraft {
    fn from(request: SaveAnimeRequest) -> Self {
        Self {
            name: request.name,
            start_year: request.start_year,
            end_year: request.end_year,
            volume_count: request.volume_count,
            comments: request.comments,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageDto {
    pub message: String,
}

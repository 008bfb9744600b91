use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{AnimeDto, ApiError, MessageDto, SaveAnimeRequest};
use crate::models::anime::AnimeDraft;
use crate::state::AppState;

pub async fn list_animes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AnimeDto>>, ApiError> {
    let animes = state.store().list_animes().await?;

    Ok(Json(animes.into_iter().map(AnimeDto::from).collect()))
}

pub async fn create_anime(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SaveAnimeRequest>,
) -> Result<Json<AnimeDto>, ApiError> {
    let created = state.store().add_anime(&AnimeDraft::from(payload)).await?;

    Ok(Json(AnimeDto::from(created)))
}

/// Full overwrite of the matching row. An id with no row still answers
/// with the acknowledgement; the statement simply affects zero rows.
pub async fn update_anime(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveAnimeRequest>,
) -> Result<Json<MessageDto>, ApiError> {
    state
        .store()
        .overwrite_anime(id, &AnimeDraft::from(payload))
        .await?;

    Ok(Json(MessageDto {
        message: "Actualizado".to_string(),
    }))
}

pub async fn delete_anime(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<MessageDto>, ApiError> {
    state.store().remove_anime(id).await?;

    Ok(Json(MessageDto {
        message: "Eliminado".to_string(),
    }))
}

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;
use crate::state::AppState;

mod catalog;
mod error;
mod seed;
mod types;

pub use error::ApiError;
pub use types::*;

pub async fn create_app_state_from_config(config: Config) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;

    Ok(Arc::new(AppState { store }))
}

pub fn router(state: Arc<AppState>) -> Router {
    // The frontend lives on another origin, so the whole API is open to
    // any origin, method and header.
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/animes", get(catalog::list_animes))
        .route("/animes", post(catalog::create_anime))
        .route("/animes/{id}", put(catalog::update_anime))
        .route("/animes/{id}", delete(catalog::delete_anime))
        .route("/semilla", get(seed::load_samples))
        .with_state(state)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// The service has exactly one failure mode: the backing store refused a
/// statement. Callers receive the raw store error text as the body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Store(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self::Store(message) = self;
        tracing::error!("Store operation failed: {message}");
        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Store(err.to_string())
    }
}

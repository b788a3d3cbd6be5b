use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::models::ErrorBody;

pub type Result<T> = std::result::Result<T, SummarizerError>;

#[derive(Debug, Error)]
pub enum SummarizerError {
    /// Request payload failed schema or value checks
    #[error("{0}")]
    Validation(String),

    /// Model provider failed or returned unusable output
    #[error("{0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Error reported by the summarizer API to the client
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SummarizerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SummarizerError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SummarizerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match &self {
            SummarizerError::Validation(msg) => msg.clone(),
            other => format!("Internal server error: {other}"),
        };
        if status.is_server_error() {
            tracing::error!(%status, "{detail}");
        } else {
            tracing::warn!(%status, "{detail}");
        }
        (status, Json(ErrorBody { detail })).into_response()
    }
}

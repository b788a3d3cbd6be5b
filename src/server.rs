use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::{Result, SummarizerError};
use crate::models::{HealthResponse, SummaryRequest, SummaryResponse};
use crate::summarizer::Summarizer;
use crate::validation::RequestValidator;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    summarizer: Arc<dyn Summarizer>,
    validator: Arc<RequestValidator>,
}

impl AppState {
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            summarizer,
            validator: Arc::new(RequestValidator::new()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/summarize", post(summarize))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

async fn summarize(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>> {
    let Json(req) =
        payload.map_err(|rejection| SummarizerError::Validation(rejection.body_text()))?;
    state.validator.validate(&req)?;

    let summary = state.summarizer.summarize(&req).await?;
    let response = SummaryResponse::from_summary(summary, &req);
    tracing::info!(
        word_count = response.word_count,
        char_count = response.char_count,
        "Summary generated"
    );
    Ok(Json(response))
}

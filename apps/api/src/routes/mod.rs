pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::coaching::handlers;
use crate::extract::handlers as extract_handlers;
use crate::state::AppState;

/// Body limit for the router. Set well above the 10 MB application cap so
/// oversized uploads reach the validator and get its message instead of a
/// bare 413 from the framework.
const BODY_LIMIT_BYTES: usize = 32 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resume/extract",
            post(extract_handlers::handle_extract),
        )
        .route("/api/v1/resume/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/resume/analyze-text",
            post(handlers::handle_analyze_text),
        )
        .route("/api/v1/cover-letter", post(handlers::handle_cover_letter))
        .route(
            "/api/v1/interview/turn",
            post(handlers::handle_interview_turn),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
}

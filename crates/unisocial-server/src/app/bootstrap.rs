use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use unisocial_core::api::{CHAT_COMPLETION_PATH, CONVERSATION_ANALYSIS_PATH};

use super::state::SharedState;
use crate::routes::{analysis, chat, health, scenarios};

/// Builds the full router. Only `POST` is routed for the orchestration paths;
/// other methods get axum's 405.
///
/// The body limit is enforced by the `Json` extractor, so an oversized body
/// surfaces as a rejection and gets the usual JSON error body with a 413.
pub fn build_router(state: SharedState, body_limit_bytes: usize) -> Router {
    Router::new()
        .route(CHAT_COMPLETION_PATH, post(chat::chat_completion))
        .route(
            CONVERSATION_ANALYSIS_PATH,
            post(analysis::conversation_analysis),
        )
        .merge(scenarios::routes())
        .route("/health", get(health::health))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

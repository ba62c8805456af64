pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::panic_response;
use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/ai/analyze-job", post(handlers::handle_analyze_job))
        .route(
            "/api/v1/ai/rank-candidates",
            post(handlers::handle_rank_candidates),
        )
        .route("/api/v1/ai/match-resume", post(handlers::handle_match_resume))
        .route(
            "/api/v1/ai/enhance-summary",
            post(handlers::handle_enhance_summary),
        )
        .route(
            "/api/v1/ai/suggest-skills",
            post(handlers::handle_suggest_skills),
        )
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

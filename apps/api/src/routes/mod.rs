pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::pipeline::handlers as pipeline_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Full analysis pipeline (document read -> extraction -> comparison -> narrative)
        .route("/api/v1/analysis", post(pipeline_handlers::handle_analyze))
        // À-la-carte core operations (no LLM)
        .route(
            "/api/v1/analysis/compare",
            post(analysis_handlers::handle_compare),
        )
        .route(
            "/api/v1/analysis/similarity",
            post(analysis_handlers::handle_similarity),
        )
        .route(
            "/api/v1/analysis/skills",
            post(analysis_handlers::handle_skill_scan),
        )
        .with_state(state)
}

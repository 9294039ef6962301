pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/letters/generate", post(handlers::handle_generate))
        .route(
            "/api/v1/letters/suggest-skills",
            post(handlers::handle_suggest_skills),
        )
        .route(
            "/api/v1/letters/optimize-ats",
            post(handlers::handle_optimize_ats),
        )
        .route(
            "/api/v1/letters/extract-job",
            post(handlers::handle_extract_job),
        )
        .route(
            "/api/v1/letters/extract-resume",
            post(handlers::handle_extract_resume),
        )
        .with_state(state)
}

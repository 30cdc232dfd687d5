pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::news::handlers as news_handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/api/v1/analyze-skill-gap",
            post(handlers::handle_analyze_skill_gap),
        )
        .route(
            "/api/v1/generate-roadmap",
            post(handlers::handle_generate_roadmap),
        )
        .route("/api/v1/career-plan", post(handlers::handle_career_plan))
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        // News
        .route("/api/v1/news", get(news_handlers::handle_top_stories))
        // Legacy paths kept for older clients
        .route("/api/skill-gap", post(handlers::handle_analyze_skill_gap))
        .route("/api/roadmap", post(handlers::handle_generate_roadmap))
        .fallback(not_found)
        .with_state(state)
}

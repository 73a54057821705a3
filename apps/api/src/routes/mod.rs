pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advice::handlers as advice_handlers;
use crate::analysis::handlers as analysis_handlers;
use crate::interview::handlers as interview_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career advice
        .route("/api/v1/advice", post(advice_handlers::handle_advice))
        // Resume analysis
        .route(
            "/api/v1/resumes/extract",
            post(analysis_handlers::handle_extract),
        )
        .route(
            "/api/v1/resumes/analyze",
            post(analysis_handlers::handle_analyze),
        )
        // Mock interviews
        .route(
            "/api/v1/interviews",
            post(interview_handlers::handle_create_session),
        )
        .route(
            "/api/v1/interviews/:id/end",
            post(interview_handlers::handle_end_session),
        )
        .with_state(state)
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::plan::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Answer normalisation
        .route("/api/v1/normalize", post(handlers::handle_normalize))
        // Plan derivation
        .route("/api/v1/plan", post(handlers::handle_plan))
        .route("/api/v1/analysis", post(handlers::handle_analysis))
        .route("/api/v1/submissions", post(handlers::handle_submission))
        .with_state(state)
}

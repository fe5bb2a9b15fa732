//! API route definitions
//!
//! Organizes endpoints for the assessment dashboard:
//! - /api/v1/assessment - current snapshot, estimate, and plot points
//! - /api/v1/assessment/* - slider / toggle / mode / evidence mutations
//! - /api/v1/config - widget bounds and polarity for the front end
//! - /api/v1/reference - element table and citations

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{self, WorkbenchState};

/// Create all API routes for the dashboard
pub fn api_routes(state: WorkbenchState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/assessment", get(handlers::get_assessment))
        .route("/assessment/slider", post(handlers::set_slider))
        .route("/assessment/toggle", post(handlers::set_toggle))
        .route("/assessment/mode", post(handlers::set_mode))
        .route("/assessment/evidence", post(handlers::apply_evidence))
        .route("/assessment/confidence", post(handlers::set_confidence))
        .route("/assessment/reset", post(handlers::reset_assessment))
        .route("/config", get(handlers::get_config))
        .route("/reference", get(handlers::get_reference))
        .with_state(state)
}

/// Legacy health endpoint at root level
pub fn legacy_routes(state: WorkbenchState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .with_state(state)
}

//! REST API module using Axum
//!
//! Provides HTTP endpoints for the assessment dashboard. The API is the
//! presentation boundary: it accepts raw slider integers, checkbox booleans,
//! and tier selections, and serves the normalized snapshot, the computed
//! estimate, and the confidence plot data.

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::WorkbenchState;

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `GPOS_CORS_ORIGINS` to a comma-separated list of allowed origins
/// for development (e.g., `http://localhost:5173` for a Vite dev server).
fn build_cors_layer() -> CorsLayer {
    match std::env::var("GPOS_CORS_ORIGINS") {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
        }
        Err(_) => CorsLayer::new()
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    }
}

/// Create the complete application router.
pub fn create_app(state: WorkbenchState) -> Router {
    let cors = build_cors_layer();

    Router::new()
        .nest("/api/v1", routes::api_routes(state.clone()))
        // Legacy health endpoint at /health
        .merge(routes::legacy_routes(state))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

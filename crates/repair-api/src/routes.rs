//! Router assembly

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use repair_shared::config::CorsSettings;

use crate::handlers::{self, health, tickets, workers};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/api/health", get(health::health_check))
        // Repair request routes
        .route(
            "/api/repair-requests",
            get(tickets::list_repair_requests).post(tickets::create_repair_request),
        )
        .route("/api/repair-requests/{id}", get(tickets::get_repair_request))
        .route("/api/repair-requests/{id}/assign", patch(tickets::assign_worker))
        // Worker routes
        .route("/api/workers", get(workers::list_workers).post(workers::create_worker))
        .route("/api/workers/{id}", axum::routing::delete(workers::delete_worker))
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
        // Tracing
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

/// CORS restricted to the configured frontend origin.
pub fn cors_layer(settings: &CorsSettings) -> Result<CorsLayer, header::InvalidHeaderValue> {
    let origin = settings.frontend_origin.parse::<HeaderValue>()?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]))
}

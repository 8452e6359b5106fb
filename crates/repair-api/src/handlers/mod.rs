//! HTTP handlers

pub mod health;
pub mod tickets;
pub mod workers;

use crate::error::ApiError;

/// Fallback for unknown routes
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

/// Known path, unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

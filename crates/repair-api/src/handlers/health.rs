use axum::Json;

use repair_shared::types::now_timestamp;

use crate::response::{HealthResponse, STATUS_OK};

/// Health check handler - GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: STATUS_OK,
        timestamp: now_timestamp(),
    })
}

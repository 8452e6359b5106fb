// ============================================================================
// Repair API - Worker Handlers
// File: crates/repair-api/src/handlers/workers.rs
// ============================================================================

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use repair_core::validation::WorkerDraft;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::response::{StatusResponse, WorkerCreatedResponse, WorkerListResponse};
use crate::state::AppState;

/// GET /api/workers
pub async fn list_workers(State(state): State<AppState>) -> Result<Json<WorkerListResponse>, ApiError> {
    let workers = state.worker_service.list().await?;
    Ok(Json(WorkerListResponse { workers }))
}

/// POST /api/workers
pub async fn create_worker(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<WorkerDraft>,
) -> Result<(StatusCode, Json<WorkerCreatedResponse>), ApiError> {
    let worker = state.worker_service.create(draft).await?;
    Ok((StatusCode::CREATED, Json(WorkerCreatedResponse::new(worker))))
}

/// DELETE /api/workers/{id}
pub async fn delete_worker(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.worker_service.delete(&id).await?;
    Ok(Json(StatusResponse::worker_deleted()))
}

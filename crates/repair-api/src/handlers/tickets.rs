// ============================================================================
// Repair API - Ticket Handlers
// File: crates/repair-api/src/handlers/tickets.rs
// ============================================================================
//! Repair request HTTP handlers (submit, list, detail, assign)

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use repair_core::validation::{AssignWorkerDraft, RepairRequestDraft};

use crate::error::ApiError;
use crate::extract::{json_or_default, ApiJson};
use crate::response::{TicketCreatedResponse, TicketListResponse, TicketResponse, TicketUpdatedResponse};
use crate::state::AppState;

/// Submit handler - POST /api/repair-requests
pub async fn create_repair_request(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<RepairRequestDraft>,
) -> Result<(StatusCode, Json<TicketCreatedResponse>), ApiError> {
    let ticket = state.ticket_service.submit(draft).await?;
    Ok((StatusCode::CREATED, Json(TicketCreatedResponse::new(ticket.id))))
}

/// List handler - GET /api/repair-requests
pub async fn list_repair_requests(
    State(state): State<AppState>,
) -> Result<Json<TicketListResponse>, ApiError> {
    let tickets = state.ticket_service.list().await?;
    Ok(Json(TicketListResponse { tickets }))
}

/// Detail handler - GET /api/repair-requests/{id}
pub async fn get_repair_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TicketResponse>, ApiError> {
    let ticket = state.ticket_service.get(&id).await?;
    Ok(Json(TicketResponse { ticket }))
}

/// Assign handler - PATCH /api/repair-requests/{id}/assign
pub async fn assign_worker(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<TicketUpdatedResponse>, ApiError> {
    // Unknown tickets are reported before anything about the body.
    state.ticket_service.get(&id).await?;
    let body: AssignWorkerDraft = json_or_default(&body)?;

    let ticket = state.ticket_service.assign(&id, body.worker_id()).await?;
    let worker_name = ticket
        .assigned_worker
        .as_ref()
        .map(|w| w.name.clone())
        .unwrap_or_default();
    Ok(Json(TicketUpdatedResponse::assigned(ticket, &worker_name)))
}

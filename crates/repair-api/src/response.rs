//! API response envelopes

use serde::Serialize;
use uuid::Uuid;

use repair_core::domain::{Ticket, Worker};

pub const STATUS_CREATED: &str = "created";
pub const STATUS_UPDATED: &str = "updated";
pub const STATUS_DELETED: &str = "deleted";
pub const STATUS_OK: &str = "ok";
pub const STATUS_ERROR: &str = "error";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCreatedResponse {
    pub status: &'static str,
    pub message: String,
    pub ticket_id: Uuid,
}

impl TicketCreatedResponse {
    pub fn new(ticket_id: Uuid) -> Self {
        Self {
            status: STATUS_CREATED,
            message: "Repair request submitted successfully".to_string(),
            ticket_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TicketListResponse {
    pub tickets: Vec<Ticket>,
}

#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub ticket: Ticket,
}

#[derive(Debug, Serialize)]
pub struct TicketUpdatedResponse {
    pub status: &'static str,
    pub message: String,
    pub ticket: Ticket,
}

impl TicketUpdatedResponse {
    pub fn assigned(ticket: Ticket, worker_name: &str) -> Self {
        Self {
            status: STATUS_UPDATED,
            message: format!("Ticket assigned to {}", worker_name),
            ticket,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WorkerListResponse {
    pub workers: Vec<Worker>,
}

#[derive(Debug, Serialize)]
pub struct WorkerCreatedResponse {
    pub status: &'static str,
    pub message: String,
    pub worker: Worker,
}

impl WorkerCreatedResponse {
    pub fn new(worker: Worker) -> Self {
        Self {
            status: STATUS_CREATED,
            message: "Worker created successfully".to_string(),
            worker,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: String,
}

impl StatusResponse {
    pub fn worker_deleted() -> Self {
        Self {
            status: STATUS_DELETED,
            message: "Worker removed successfully".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

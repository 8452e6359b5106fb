//! Client-side port over the REST surface, one method per endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use repair_core::domain::{Ticket, Worker};
use repair_core::validation::{RepairRequestDraft, WorkerDraft};

use crate::error::Result;

/// Result of a successful assignment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssignmentOutcome {
    pub message: String,
    pub ticket: Ticket,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Returns the id of the created ticket.
    async fn submit_repair_request(&self, draft: &RepairRequestDraft) -> Result<Uuid>;

    async fn list_tickets(&self) -> Result<Vec<Ticket>>;

    async fn get_ticket(&self, id: &str) -> Result<Ticket>;

    async fn assign_worker(&self, ticket_id: &str, worker_id: &str) -> Result<AssignmentOutcome>;

    async fn list_workers(&self) -> Result<Vec<Worker>>;

    async fn create_worker(&self, draft: &WorkerDraft) -> Result<Worker>;

    async fn delete_worker(&self, id: &str) -> Result<()>;

    async fn health(&self) -> Result<HealthStatus>;
}

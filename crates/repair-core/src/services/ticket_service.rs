// ============================================================================
// Repair Core - Ticket Service
// File: crates/repair-core/src/services/ticket_service.rs
// ============================================================================
//! Repair request intake and worker assignment

use std::sync::Arc;
use tracing::{info, warn};

use repair_shared::parse_id;

use crate::audit::{AuditEvent, AuditRecord, AuditSink};
use crate::domain::Ticket;
use crate::error::DomainError;
use crate::repositories::{TicketRepository, WorkerRepository};
use crate::validation::RepairRequestDraft;

/// Ticket service for submission, lookup and assignment flows
pub struct TicketService {
    ticket_repo: Arc<dyn TicketRepository>,
    worker_repo: Arc<dyn WorkerRepository>,
    audit: Arc<dyn AuditSink>,
}

impl TicketService {
    pub fn new(
        ticket_repo: Arc<dyn TicketRepository>,
        worker_repo: Arc<dyn WorkerRepository>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            ticket_repo,
            worker_repo,
            audit,
        }
    }

    /// Submit a new repair request
    pub async fn submit(&self, draft: RepairRequestDraft) -> Result<Ticket, DomainError> {
        let fields = draft.into_new_ticket().map_err(|errors| {
            warn!("Repair request rejected: {} invalid field(s)", errors.len());
            DomainError::Validation(errors)
        })?;

        let ticket = self.ticket_repo.create(&Ticket::new(fields)).await?;

        self.audit.record(AuditRecord::at(
            AuditEvent::RepairRequestCreated {
                ticket_id: ticket.id,
                name: ticket.name.clone(),
                address: ticket.address.clone(),
                issue_type: ticket.issue_type,
                priority: ticket.priority,
            },
            &ticket.created_at,
        ));
        info!("Repair request created: {}", ticket.id);

        Ok(ticket)
    }

    pub async fn get(&self, id: &str) -> Result<Ticket, DomainError> {
        let id = parse_id(id).ok_or(DomainError::TicketNotFound)?;
        self.ticket_repo
            .find_by_id(&id)
            .await?
            .ok_or(DomainError::TicketNotFound)
    }

    /// All tickets in submission order
    pub async fn list(&self) -> Result<Vec<Ticket>, DomainError> {
        self.ticket_repo.list_all().await
    }

    /// Assign a worker to a ticket.
    ///
    /// Checks run in order: ticket exists, worker id given, worker exists.
    /// The ticket is only touched once all three pass. Concurrent assignments
    /// to the same ticket are not serialized; the last one wins.
    pub async fn assign(&self, ticket_id: &str, worker_id: Option<&str>) -> Result<Ticket, DomainError> {
        let ticket = self.get(ticket_id).await?;

        let worker_id = worker_id.ok_or(DomainError::MissingParameter("workerId"))?;
        let worker_id = parse_id(worker_id).ok_or(DomainError::WorkerNotFound)?;
        let worker = self
            .worker_repo
            .find_by_id(&worker_id)
            .await?
            .ok_or_else(|| {
                warn!("Assignment of ticket {} failed: worker {} not found", ticket.id, worker_id);
                DomainError::WorkerNotFound
            })?;

        let updated = self
            .ticket_repo
            .assign_worker(&ticket.id, &worker)
            .await?
            .ok_or(DomainError::TicketNotFound)?;

        self.audit.record(AuditRecord::now(AuditEvent::TicketAssigned {
            ticket_id: updated.id,
            worker_id: worker.id,
            worker_name: worker.name.clone(),
        }));
        info!("Ticket {} assigned to worker {}", updated.id, worker.id);

        Ok(updated)
    }
}

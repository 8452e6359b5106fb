// ============================================================================
// Repair Infrastructure - In-Memory Ticket Repository
// File: crates/repair-infrastructure/src/memory/ticket_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use repair_core::domain::{Ticket, Worker};
use repair_core::error::DomainError;
use repair_core::repositories::TicketRepository;

/// Append-only ticket collection. Tickets are never removed.
#[derive(Default)]
pub struct MemoryTicketRepository {
    tickets: RwLock<Vec<Ticket>>,
}

impl MemoryTicketRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TicketRepository for MemoryTicketRepository {
    async fn create(&self, ticket: &Ticket) -> Result<Ticket, DomainError> {
        let mut tickets = self.tickets.write();
        tickets.push(ticket.clone());
        debug!("Stored ticket {} ({} total)", ticket.id, tickets.len());
        Ok(ticket.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Ticket>, DomainError> {
        Ok(self.tickets.read().iter().find(|t| t.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Ticket>, DomainError> {
        Ok(self.tickets.read().clone())
    }

    async fn assign_worker(&self, id: &Uuid, worker: &Worker) -> Result<Option<Ticket>, DomainError> {
        let mut tickets = self.tickets.write();
        let Some(ticket) = tickets.iter_mut().find(|t| t.id == *id) else {
            return Ok(None);
        };
        ticket.assign_to(worker);
        Ok(Some(ticket.clone()))
    }
}

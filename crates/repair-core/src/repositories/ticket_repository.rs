//! Ticket repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{Ticket, Worker};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Append a ticket; listing keeps insertion order.
    async fn create(&self, ticket: &Ticket) -> Result<Ticket, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Ticket>, DomainError>;
    async fn list_all(&self) -> Result<Vec<Ticket>, DomainError>;
    /// Attach a worker snapshot in place. `None` when the ticket is absent.
    async fn assign_worker(&self, id: &Uuid, worker: &Worker) -> Result<Option<Ticket>, DomainError>;
}

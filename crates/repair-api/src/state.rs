use std::sync::Arc;

use repair_core::audit::AuditSink;
use repair_core::repositories::{TicketRepository, WorkerRepository};
use repair_core::services::{TicketService, WorkerService};

#[derive(Clone)]
pub struct AppState {
    pub ticket_service: Arc<TicketService>,
    pub worker_service: Arc<WorkerService>,
}

impl AppState {
    /// Wire both services over the given stores. The worker store is shared
    /// so assignments see workers created through the worker endpoints.
    pub fn new(
        ticket_repo: Arc<dyn TicketRepository>,
        worker_repo: Arc<dyn WorkerRepository>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            ticket_service: Arc::new(TicketService::new(ticket_repo, worker_repo.clone(), audit.clone())),
            worker_service: Arc::new(WorkerService::new(worker_repo, audit)),
        }
    }
}

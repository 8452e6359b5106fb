// ============================================================================
// Repair Core - Worker Service
// File: crates/repair-core/src/services/worker_service.rs
// ============================================================================
//! Worker administration: create, list, lookup and delete.

use std::sync::Arc;
use tracing::{info, warn};

use repair_shared::parse_id;

use crate::audit::{AuditEvent, AuditRecord, AuditSink};
use crate::domain::Worker;
use crate::error::DomainError;
use crate::repositories::WorkerRepository;
use crate::validation::WorkerDraft;

pub struct WorkerService {
    worker_repo: Arc<dyn WorkerRepository>,
    audit: Arc<dyn AuditSink>,
}

impl WorkerService {
    pub fn new(worker_repo: Arc<dyn WorkerRepository>, audit: Arc<dyn AuditSink>) -> Self {
        Self { worker_repo, audit }
    }

    /// Validate and store a new worker
    pub async fn create(&self, draft: WorkerDraft) -> Result<Worker, DomainError> {
        let fields = draft.into_new_worker().map_err(|errors| {
            warn!("Worker rejected: {} invalid field(s)", errors.len());
            DomainError::Validation(errors)
        })?;

        let worker = self.worker_repo.create(&Worker::new(fields)).await?;

        self.audit.record(AuditRecord::now(AuditEvent::WorkerCreated {
            worker_id: worker.id,
            name: worker.name.clone(),
            specialization: worker.specialization,
        }));
        info!("Worker created: {}", worker.id);

        Ok(worker)
    }

    pub async fn list(&self) -> Result<Vec<Worker>, DomainError> {
        self.worker_repo.list_all().await
    }

    pub async fn get(&self, id: &str) -> Result<Worker, DomainError> {
        let id = parse_id(id).ok_or(DomainError::WorkerNotFound)?;
        self.worker_repo
            .find_by_id(&id)
            .await?
            .ok_or(DomainError::WorkerNotFound)
    }

    /// Remove a worker. Tickets keep their snapshot of it.
    pub async fn delete(&self, id: &str) -> Result<Worker, DomainError> {
        let id = parse_id(id).ok_or(DomainError::WorkerNotFound)?;
        let removed = self
            .worker_repo
            .delete(&id)
            .await?
            .ok_or(DomainError::WorkerNotFound)?;

        self.audit.record(AuditRecord::now(AuditEvent::WorkerDeleted {
            worker_id: removed.id,
            name: removed.name.clone(),
        }));
        info!("Worker deleted: {}", removed.id);

        Ok(removed)
    }
}

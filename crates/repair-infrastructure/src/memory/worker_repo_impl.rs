// ============================================================================
// Repair Infrastructure - In-Memory Worker Repository
// File: crates/repair-infrastructure/src/memory/worker_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use repair_core::domain::Worker;
use repair_core::error::DomainError;
use repair_core::repositories::WorkerRepository;

#[derive(Default)]
pub struct MemoryWorkerRepository {
    workers: RwLock<Vec<Worker>>,
}

impl MemoryWorkerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkerRepository for MemoryWorkerRepository {
    async fn create(&self, worker: &Worker) -> Result<Worker, DomainError> {
        let mut workers = self.workers.write();
        workers.push(worker.clone());
        debug!("Stored worker {} ({} total)", worker.id, workers.len());
        Ok(worker.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Worker>, DomainError> {
        Ok(self.workers.read().iter().find(|w| w.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Worker>, DomainError> {
        Ok(self.workers.read().clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<Option<Worker>, DomainError> {
        let mut workers = self.workers.write();
        let removed = workers
            .iter()
            .position(|w| w.id == *id)
            .map(|index| workers.remove(index));
        Ok(removed)
    }
}

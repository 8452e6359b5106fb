//! Worker repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Worker;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkerRepository: Send + Sync {
    async fn create(&self, worker: &Worker) -> Result<Worker, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Worker>, DomainError>;
    async fn list_all(&self) -> Result<Vec<Worker>, DomainError>;
    /// Remove and return the worker. `None` when absent.
    async fn delete(&self, id: &Uuid) -> Result<Option<Worker>, DomainError>;
}

//! Worker Management ViewModel
//!
//! Roster listing with an inline add form and per-row delete.

use std::sync::Arc;

use tracing::{info, warn};

use repair_core::domain::Worker;
use repair_core::validation::WorkerDraft;

use crate::api::PortalApi;
use crate::error::ClientError;

use super::LoadState;

pub struct WorkerListViewModel {
    pub state: LoadState<Vec<Worker>>,
    pub new_name: String,
    pub new_specialization: String,
    pub is_adding: bool,
    /// Error shown next to the add form.
    pub add_error: Option<String>,
    api: Arc<dyn PortalApi>,
}

impl WorkerListViewModel {
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self {
            state: LoadState::Loading,
            new_name: String::new(),
            new_specialization: String::new(),
            is_adding: false,
            add_error: None,
            api,
        }
    }

    pub fn workers(&self) -> &[Worker] {
        self.state.loaded().map(Vec::as_slice).unwrap_or(&[])
    }

    pub async fn load(&mut self) {
        self.state = LoadState::Loading;
        match self.api.list_workers().await {
            Ok(workers) => self.state = LoadState::Loaded(workers),
            Err(e) => {
                warn!("Failed to load workers: {}", e);
                self.state = LoadState::Error(e.to_string());
            }
        }
    }

    /// Validate the add form and enter `adding`. Returns the draft to send.
    pub fn begin_add(&mut self) -> Option<WorkerDraft> {
        if self.is_adding {
            return None;
        }
        self.add_error = None;

        let draft = WorkerDraft {
            name: Some(self.new_name.clone()),
            specialization: Some(self.new_specialization.clone()),
        };
        if let Some(first) = draft.field_errors().into_iter().next() {
            self.add_error = Some(first.message);
            return None;
        }

        self.is_adding = true;
        Some(draft)
    }

    /// Append the created worker locally and clear the form.
    pub fn on_added(&mut self, worker: Worker) {
        info!("Worker added: {}", worker.id);
        self.is_adding = false;
        if let LoadState::Loaded(workers) = &mut self.state {
            workers.push(worker);
        }
        self.new_name.clear();
        self.new_specialization.clear();
    }

    pub fn on_add_failed(&mut self, error: ClientError) {
        warn!("Failed to add worker: {}", error);
        self.is_adding = false;
        self.add_error = Some(
            error
                .field_errors()
                .first()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| error.to_string()),
        );
    }

    pub async fn add(&mut self) {
        let Some(draft) = self.begin_add() else {
            return;
        };
        match self.api.create_worker(&draft).await {
            Ok(worker) => self.on_added(worker),
            Err(e) => self.on_add_failed(e),
        }
    }

    /// Remove the row on success; a failure moves the whole view to error.
    pub async fn delete(&mut self, worker_id: &str) {
        match self.api.delete_worker(worker_id).await {
            Ok(()) => {
                if let LoadState::Loaded(workers) = &mut self.state {
                    workers.retain(|w| w.id.to_string() != worker_id);
                }
            }
            Err(e) => {
                warn!("Failed to delete worker {}: {}", worker_id, e);
                self.state = LoadState::Error(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPortalApi;
    use crate::viewmodel::test_support::{api_error, sample_worker};

    fn loaded(api: MockPortalApi, workers: Vec<Worker>) -> WorkerListViewModel {
        let mut vm = WorkerListViewModel::new(Arc::new(api));
        vm.state = LoadState::Loaded(workers);
        vm
    }

    #[tokio::test]
    async fn test_load_lists_workers() {
        let worker = sample_worker("Pieter Jansen");
        let w = worker.clone();
        let mut api = MockPortalApi::new();
        api.expect_list_workers().returning(move || Ok(vec![w.clone()]));
        let mut vm = WorkerListViewModel::new(Arc::new(api));

        vm.load().await;

        assert_eq!(vm.workers(), &[worker]);
    }

    #[tokio::test]
    async fn test_add_validates_locally() {
        let mut api = MockPortalApi::new();
        api.expect_create_worker().never();
        let mut vm = loaded(api, vec![]);

        vm.add().await;
        assert_eq!(vm.add_error.as_deref(), Some("Worker name is required"));

        vm.new_name = "Eva Visser".to_string();
        vm.new_specialization = "Roofer".to_string();
        vm.add().await;
        assert!(vm.add_error.as_deref().unwrap().starts_with("Specialization must be one of"));
        assert!(!vm.is_adding);
    }

    #[tokio::test]
    async fn test_add_appends_and_clears_form() {
        let created = sample_worker("Eva Visser");
        let c = created.clone();
        let mut api = MockPortalApi::new();
        api.expect_create_worker().times(1).returning(move |_| Ok(c.clone()));
        let mut vm = loaded(api, vec![sample_worker("Pieter Jansen")]);
        vm.new_name = "Eva Visser".to_string();
        vm.new_specialization = "Plumber".to_string();

        vm.add().await;

        assert_eq!(vm.workers().len(), 2);
        assert_eq!(vm.workers()[1], created);
        assert!(vm.new_name.is_empty());
        assert!(vm.new_specialization.is_empty());
        assert!(vm.add_error.is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let keep = sample_worker("Pieter Jansen");
        let gone = sample_worker("Eva Visser");
        let mut api = MockPortalApi::new();
        api.expect_delete_worker().times(1).returning(|_| Ok(()));
        let mut vm = loaded(api, vec![keep.clone(), gone.clone()]);

        vm.delete(&gone.id.to_string()).await;

        assert_eq!(vm.workers(), &[keep]);
    }

    #[tokio::test]
    async fn test_delete_failure_moves_to_error() {
        let mut api = MockPortalApi::new();
        api.expect_delete_worker()
            .returning(|_| Err(api_error(404, "Worker not found", vec![])));
        let mut vm = loaded(api, vec![sample_worker("Pieter Jansen")]);

        vm.delete("missing").await;

        assert_eq!(vm.state.error(), Some("Worker not found"));
    }
}

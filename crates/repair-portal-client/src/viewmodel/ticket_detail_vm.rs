//! Ticket Detail ViewModel
//!
//! Loads one ticket together with the worker roster and drives assignment.
//! The assignment sub-state (`is_assigning`, `assign_message`) is tracked
//! separately from the page state: a failed assignment keeps the ticket on
//! screen.

use std::sync::Arc;

use tracing::{info, warn};

use repair_core::domain::{Ticket, Worker};

use crate::api::{AssignmentOutcome, PortalApi};
use crate::error::ClientError;

use super::LoadState;

pub struct TicketDetailViewModel {
    pub ticket_id: String,
    pub state: LoadState<Ticket>,
    pub workers: Vec<Worker>,
    pub selected_worker_id: Option<String>,
    pub is_assigning: bool,
    pub assign_message: Option<String>,
    api: Arc<dyn PortalApi>,
}

impl TicketDetailViewModel {
    pub fn new(api: Arc<dyn PortalApi>, ticket_id: impl Into<String>) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            state: LoadState::Loading,
            workers: Vec::new(),
            selected_worker_id: None,
            is_assigning: false,
            assign_message: None,
            api,
        }
    }

    pub fn on_loaded(&mut self, ticket: Ticket, workers: Vec<Worker>) {
        self.state = LoadState::Loaded(ticket);
        self.workers = workers;
    }

    pub fn on_load_failed(&mut self, error: ClientError) {
        warn!("Failed to load ticket {}: {}", self.ticket_id, error);
        self.state = LoadState::Error(error.to_string());
    }

    pub async fn load(&mut self) {
        self.state = LoadState::Loading;
        let (ticket, workers) = tokio::join!(self.api.get_ticket(&self.ticket_id), self.api.list_workers());
        match (ticket, workers) {
            (Ok(ticket), Ok(workers)) => self.on_loaded(ticket, workers),
            (Err(e), _) | (_, Err(e)) => self.on_load_failed(e),
        }
    }

    pub fn select_worker(&mut self, worker_id: Option<String>) {
        self.selected_worker_id = worker_id.filter(|id| !id.is_empty());
    }

    /// Assignment needs a loaded ticket, a non-empty roster and a selection.
    pub fn can_assign(&self) -> bool {
        self.state.loaded().is_some()
            && !self.workers.is_empty()
            && self.selected_worker_id.is_some()
            && !self.is_assigning
    }

    /// Enter the assigning sub-state. Returns the selected worker id.
    pub fn begin_assign(&mut self) -> Option<String> {
        if !self.can_assign() {
            return None;
        }
        self.is_assigning = true;
        self.assign_message = None;
        self.selected_worker_id.clone()
    }

    pub fn on_assigned(&mut self, outcome: AssignmentOutcome) {
        info!("{}", outcome.message);
        self.is_assigning = false;
        self.state = LoadState::Loaded(outcome.ticket);
        self.selected_worker_id = None;
        self.assign_message = Some(outcome.message);
    }

    pub fn on_assign_failed(&mut self, error: ClientError) {
        warn!("Assignment of ticket {} failed: {}", self.ticket_id, error);
        self.is_assigning = false;
        self.assign_message = Some(error.to_string());
    }

    pub async fn assign(&mut self) {
        let Some(worker_id) = self.begin_assign() else {
            return;
        };
        match self.api.assign_worker(&self.ticket_id, &worker_id).await {
            Ok(outcome) => self.on_assigned(outcome),
            Err(e) => self.on_assign_failed(e),
        }
    }
}

//! Ticket List ViewModel

use std::sync::Arc;

use tracing::warn;

use repair_core::domain::Ticket;

use crate::api::PortalApi;
use crate::error::ClientError;

use super::LoadState;

pub struct TicketListViewModel {
    pub state: LoadState<Vec<Ticket>>,
    api: Arc<dyn PortalApi>,
}

impl TicketListViewModel {
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self {
            state: LoadState::Loading,
            api,
        }
    }

    pub fn on_loaded(&mut self, tickets: Vec<Ticket>) {
        self.state = LoadState::Loaded(tickets);
    }

    pub fn on_load_failed(&mut self, error: ClientError) {
        warn!("Failed to load tickets: {}", error);
        self.state = LoadState::Error(error.to_string());
    }

    pub async fn load(&mut self) {
        self.state = LoadState::Loading;
        match self.api.list_tickets().await {
            Ok(tickets) => self.on_loaded(tickets),
            Err(e) => self.on_load_failed(e),
        }
    }
}

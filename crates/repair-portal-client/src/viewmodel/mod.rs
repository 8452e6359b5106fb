//! ViewModel Module
//!
//! Render-agnostic state for each page. Every async action is split into a
//! `begin_*` step that validates and flips the in-flight flag, and `on_*`
//! transitions that apply the outcome, so an event-driven UI can run the
//! request elsewhere. The plain async method chains the two.

pub mod repair_form_vm;
pub mod ticket_detail_vm;
pub mod ticket_list_vm;
pub mod worker_list_vm;

pub use repair_form_vm::{FormField, FormPhase, RepairFormViewModel};
pub use ticket_detail_vm::TicketDetailViewModel;
pub use ticket_list_vm::TicketListViewModel;
pub use worker_list_vm::WorkerListViewModel;

/// Page-level loading state shared by the list and detail pages.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use repair_core::domain::{IssueType, NewTicket, NewWorker, Priority, Specialization, Ticket, Worker};
    use repair_core::FieldError;

    use crate::error::ClientError;

    pub fn sample_ticket() -> Ticket {
        Ticket::new(NewTicket {
            name: "Jan de Vries".to_string(),
            address: "Keizersgracht 123, 1015 CJ Amsterdam".to_string(),
            issue_type: IssueType::Plumbing,
            priority: Priority::High,
            description: "The kitchen faucet has been leaking for two days.".to_string(),
        })
    }

    pub fn sample_worker(name: &str) -> Worker {
        Worker::new(NewWorker {
            name: name.to_string(),
            specialization: Specialization::Plumber,
        })
    }

    pub fn api_error(status: u16, message: &str, errors: Vec<FieldError>) -> ClientError {
        ClientError::Api {
            status,
            message: message.to_string(),
            errors,
        }
    }
}

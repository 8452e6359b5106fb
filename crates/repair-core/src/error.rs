//! Domain errors

use thiserror::Error;

use crate::validation::FieldError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Complete list of violated field rules, never truncated.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Ticket not found")]
    TicketNotFound,

    #[error("Worker not found")]
    WorkerNotFound,

    #[error("{0} is required")]
    MissingParameter(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),
}

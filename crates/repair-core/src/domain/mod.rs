//! # Repair Core - Domain Module
//! 
//! Domain entities for the repair portal.

pub mod ticket;
pub mod worker;

// Re-export all entities and enums
pub use ticket::{IssueType, NewTicket, Priority, Ticket, TicketStatus};
pub use worker::{NewWorker, Specialization, Worker};

/// Human readable list of the accepted values of a closed set.
pub(crate) fn join_values(values: &[&str]) -> String {
    values.join(", ")
}

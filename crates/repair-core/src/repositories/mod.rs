//! Repository traits (ports)

pub mod ticket_repository;
pub mod worker_repository;

pub use ticket_repository::TicketRepository;
pub use worker_repository::WorkerRepository;

#[cfg(test)]
pub use ticket_repository::MockTicketRepository;
#[cfg(test)]
pub use worker_repository::MockWorkerRepository;

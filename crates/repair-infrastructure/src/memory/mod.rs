//! In-memory repository implementations.
//!
//! State lives for the lifetime of the process. Each call holds the store's
//! lock for its own duration only; there are no transactions across calls.

pub mod ticket_repo_impl;
pub mod worker_repo_impl;

pub use ticket_repo_impl::MemoryTicketRepository;
pub use worker_repo_impl::MemoryWorkerRepository;

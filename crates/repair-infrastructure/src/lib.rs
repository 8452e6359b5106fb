//! # Repair Infrastructure
//! 
//! Store implementations (adapters).

pub mod memory;

pub use memory::{MemoryTicketRepository, MemoryWorkerRepository};

//! # Repair Core
//! 
//! Domain entities, validation, services, and repository traits for the repair portal.

pub mod audit;
pub mod domain;
pub mod validation;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use validation::FieldError;

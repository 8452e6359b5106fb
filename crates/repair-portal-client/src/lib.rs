//! # Repair Portal Client
//!
//! Typed API client for the repair portal and the view models behind the
//! tenant form, the ticket pages and worker management.

pub mod api;
pub mod error;
pub mod http;
pub mod viewmodel;

pub use api::{AssignmentOutcome, HealthStatus, PortalApi};
pub use error::{ClientError, Result};
pub use http::HttpPortalClient;

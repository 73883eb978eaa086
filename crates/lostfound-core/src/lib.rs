//! Shared HTTP plumbing for Lost & Found services.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod shutdown;
pub mod tracing;

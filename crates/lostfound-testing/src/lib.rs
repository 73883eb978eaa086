//! Test utilities for Lost & Found services.
//!
//! Import from `[dev-dependencies]` only, never in production code.

pub mod auth;

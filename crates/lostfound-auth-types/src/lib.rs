//! Session-token types shared across Lost & Found services.
//!
//! Provides JWT claims, validation, and the `SessionIdentity` bearer extractor.
//! Token issuing is only compiled with the `USE_ONLY_IN_AUTH_SERVICE` feature.

pub mod identity;
pub mod token;

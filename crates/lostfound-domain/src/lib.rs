//! Domain types shared across all Lost & Found services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; `infra/` converts to and from
//! the wire strings via `as_str` / `FromStr`.

pub mod category;
pub mod status;

/// Returned by the `FromStr` impls in this crate for unknown wire values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

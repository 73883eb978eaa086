//! Lifecycle states for found items, claims and notifications.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownVariant;

macro_rules! wire_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

/// Found-item status. Only ever moves `Pending` → `Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Pending,
    Resolved,
}

wire_enum!(ItemStatus, "item status", {
    Pending => "pending",
    Resolved => "resolved",
});

/// Claim status. `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

wire_enum!(ClaimStatus, "claim status", {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
});

impl ClaimStatus {
    pub fn is_decided(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Claim lifecycle event a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ClaimReceived,
    ClaimApproved,
    ClaimRejected,
}

wire_enum!(NotificationKind, "notification kind", {
    ClaimReceived => "claim_received",
    ClaimApproved => "claim_approved",
    ClaimRejected => "claim_rejected",
});

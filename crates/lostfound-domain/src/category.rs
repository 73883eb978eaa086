//! Found-item category tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownVariant;

/// Fixed set of categories a found item can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Electronics,
    Documents,
    Wallets,
    Keys,
    Bags,
    Clothing,
    Accessories,
    Books,
    Other,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 9] = [
        Self::Electronics,
        Self::Documents,
        Self::Wallets,
        Self::Keys,
        Self::Bags,
        Self::Clothing,
        Self::Accessories,
        Self::Books,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Documents => "documents",
            Self::Wallets => "wallets",
            Self::Keys => "keys",
            Self::Bags => "bags",
            Self::Clothing => "clothing",
            Self::Accessories => "accessories",
            Self::Books => "books",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = UnknownVariant;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVariant {
                kind: "category",
                value: s.to_owned(),
            })
    }
}

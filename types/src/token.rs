//! Membership token identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a minted membership token.
///
/// Id 0 is reserved as "never assigned"; the minter collaborator must start
/// numbering at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(u64);

impl TokenId {
    /// The reserved never-assigned id.
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

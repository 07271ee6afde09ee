//! Principal identity type with `pass_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A passport identity, always prefixed with `pass_`.
///
/// Derived from an Ed25519 public key: 20 account bytes (truncated Blake2b
/// hash of the key) followed by a 4-byte checksum, both hex encoded. The
/// engine interprets no structure beyond equality; derivation and checksum
/// validation live in `passport-crypto`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity(String);

/// Hex characters in the account portion (20 bytes).
const ACCOUNT_CHARS: usize = 40;
/// Hex characters in the checksum portion (4 bytes).
const CHECKSUM_CHARS: usize = 8;

impl Identity {
    /// The standard prefix for all passport identities.
    pub const PREFIX: &'static str = "pass_";

    /// Create a new identity from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `pass_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "identity must start with pass_");
        Self(s)
    }

    /// Return the raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identity has the expected shape: prefix plus 48 lowercase
    /// hex characters. Checksum correctness is verified by
    /// `passport_crypto::validate_identity`.
    pub fn is_well_formed(&self) -> bool {
        let Some(body) = self.0.strip_prefix(Self::PREFIX) else {
            return false;
        };
        body.len() == ACCOUNT_CHARS + CHECKSUM_CHARS
            && body.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase())
    }

    /// The hex-encoded account portion (without prefix or checksum), if well-formed.
    pub fn account_hex(&self) -> Option<&str> {
        if !self.is_well_formed() {
            return None;
        }
        Some(&self.0[Self::PREFIX.len()..Self::PREFIX.len() + ACCOUNT_CHARS])
    }

    /// The hex-encoded checksum portion, if well-formed.
    pub fn checksum_hex(&self) -> Option<&str> {
        if !self.is_well_formed() {
            return None;
        }
        Some(&self.0[Self::PREFIX.len() + ACCOUNT_CHARS..])
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

//! The fixed deployment-scoping value for consent signatures.

use passport_crypto::{blake2b_256, blake2b_256_multi};
use passport_types::Identity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type descriptor hashed into every domain context.
const DOMAIN_TYPE: &[u8] = b"Domain(string name,string version,uint64 realm,identity instance)";

/// A 32-byte scoping value binding consent signatures to one deployment.
///
/// Computed exactly once when the engine is constructed and never
/// recomputed: it protects against cross-deployment replay. Protection
/// against agreement-text changes is the job of the message hash, which IS
/// rebuilt from the current text on every verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainContext([u8; 32]);

impl DomainContext {
    /// Compute the domain context from deployment-instance identity and
    /// execution-context (realm) id.
    pub fn compute(name: &str, version: &str, realm: u64, instance: &Identity) -> Self {
        Self(blake2b_256_multi(&[
            &blake2b_256(DOMAIN_TYPE),
            &blake2b_256(name.as_bytes()),
            &blake2b_256(version.as_bytes()),
            &realm.to_le_bytes(),
            instance.as_str().as_bytes(),
        ]))
    }

    /// Reconstruct a domain context from raw bytes (e.g. loaded state).
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for DomainContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0[..4] {
            write!(f, "{b:02x}")?;
        }
        write!(f, "…")
    }
}

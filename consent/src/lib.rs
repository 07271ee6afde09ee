//! Consent verification for the passport protocol.
//!
//! A claimant proves agreement to the current terms by signing a structured
//! digest: a typed hash of the agreement text wrapped with a fixed
//! deployment-scoping domain context. The domain context pins signatures to
//! one deployment instance; the agreement hash pins them to the exact text
//! in force when they were produced.

pub mod digest;
pub mod domain;
pub mod error;
pub mod verifier;

pub use digest::{agreement_hash, consent_digest};
pub use domain::DomainContext;
pub use error::ConsentError;
pub use verifier::{sign_consent, verify_consent, ConsentSignature};

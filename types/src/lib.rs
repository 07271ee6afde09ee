//! Fundamental types for the passport protocol.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: identities, token ids, membership status, key material, the
//! consent agreement, and the engine parameter record.

pub mod agreement;
pub mod identity;
pub mod keys;
pub mod params;
pub mod status;
pub mod token;

pub use agreement::ConsentAgreement;
pub use identity::Identity;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use params::{EligibilityParams, PassportParams};
pub use status::MembershipStatus;
pub use token::TokenId;

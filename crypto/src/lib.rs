//! Cryptographic primitives for the passport protocol.
//!
//! - **Ed25519** for consent signing and verification
//! - **Blake2b** for structured digests and identity derivation
//! - Identity derivation with `pass_` prefix and hex encoding

pub mod hash;
pub mod identity;
pub mod keys;
pub mod sign;

pub use hash::{blake2b_256, blake2b_256_multi};
pub use identity::{derive_identity, identity_from_account, validate_identity};
pub use keys::{generate_keypair, keypair_from_private, keypair_from_seed, public_from_private};
pub use sign::{sign_message, verify_signature};

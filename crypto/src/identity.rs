//! Identity derivation from public keys.
//!
//! Identity format: `pass_` + hex(account) + hex(checksum)
//!
//! account  = first 20 bytes of Blake2b-256(public_key)
//! checksum = first 4 bytes of Blake2b-256(account)
//!
//! The account portion is a one-way truncated hash, so the public key cannot
//! be recovered from an identity; consent envelopes carry the signer's key
//! explicitly for this reason.

use crate::hash::blake2b_256;
use passport_types::{Identity, PublicKey};

/// Bytes in the account portion of an identity.
const ACCOUNT_BYTES: usize = 20;
/// Bytes in the checksum portion.
const CHECKSUM_BYTES: usize = 4;

fn checksum(account: &[u8]) -> [u8; CHECKSUM_BYTES] {
    let digest = blake2b_256(account);
    let mut out = [0u8; CHECKSUM_BYTES];
    out.copy_from_slice(&digest[..CHECKSUM_BYTES]);
    out
}

/// Derive a `pass_`-prefixed identity from an Ed25519 public key.
pub fn derive_identity(public_key: &PublicKey) -> Identity {
    let digest = blake2b_256(public_key.as_bytes());
    identity_from_account(&digest[..ACCOUNT_BYTES])
}

/// Build an identity from raw account bytes (checksum computed here).
///
/// # Panics
/// Panics if `account` is not exactly 20 bytes.
pub fn identity_from_account(account: &[u8]) -> Identity {
    assert_eq!(account.len(), ACCOUNT_BYTES, "account must be 20 bytes");
    let check = checksum(account);
    Identity::new(format!(
        "{}{}{}",
        Identity::PREFIX,
        hex::encode(account),
        hex::encode(check)
    ))
}

/// Validate that an identity string is well-formed and its checksum matches.
pub fn validate_identity(raw: &str) -> bool {
    let Some(body) = raw.strip_prefix(Identity::PREFIX) else {
        return false;
    };
    if body.len() != 2 * (ACCOUNT_BYTES + CHECKSUM_BYTES) {
        return false;
    }
    let (account_hex, checksum_hex) = body.split_at(2 * ACCOUNT_BYTES);
    let Ok(account) = hex::decode(account_hex) else {
        return false;
    };
    let Ok(expected) = hex::decode(checksum_hex) else {
        return false;
    };
    checksum(&account)[..] == expected[..]
}

//! Consent envelope production and verification.

use crate::digest::consent_digest;
use crate::domain::DomainContext;
use crate::error::ConsentError;
use passport_crypto::{derive_identity, sign_message, verify_signature};
use passport_types::{ConsentAgreement, Identity, KeyPair, PublicKey, Signature};
use serde::{Deserialize, Serialize};

/// A signed consent envelope.
///
/// Ed25519 has no public-key recovery, so the envelope carries the claimed
/// signer key; verification checks both that the signature verifies under
/// that key and that the key derives the caller's identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentSignature {
    pub signer: PublicKey,
    pub signature: Signature,
}

/// Produce a consent envelope over the given agreement, scoped to `domain`.
pub fn sign_consent(
    domain: &DomainContext,
    agreement: &ConsentAgreement,
    keypair: &KeyPair,
) -> ConsentSignature {
    let digest = consent_digest(domain, agreement);
    ConsentSignature {
        signer: keypair.public.clone(),
        signature: sign_message(&digest, &keypair.private),
    }
}

/// Verify that `consent` attests to the current `agreement` under `domain`
/// and was produced by `caller`.
///
/// The digest is rebuilt from the current agreement text each call: a
/// signature produced against earlier text fails here once the text changes.
pub fn verify_consent(
    domain: &DomainContext,
    agreement: &ConsentAgreement,
    consent: &ConsentSignature,
    caller: &Identity,
) -> Result<(), ConsentError> {
    let digest = consent_digest(domain, agreement);
    if !verify_signature(&digest, &consent.signature, &consent.signer) {
        return Err(ConsentError::BadSignature);
    }
    if &derive_identity(&consent.signer) != caller {
        return Err(ConsentError::SignerMismatch(caller.to_string()));
    }
    Ok(())
}

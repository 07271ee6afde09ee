//! Structured two-hash digest over the agreement text.

use crate::domain::DomainContext;
use passport_crypto::{blake2b_256, blake2b_256_multi};
use passport_types::ConsentAgreement;

/// Type descriptor for the signed agreement message.
const AGREEMENT_TYPE: &[u8] = b"Agreement(string statement,string termsURI)";

/// Two-byte prefix keeping consent digests outside any other signed
/// encoding used by the protocol.
const SIGNING_PREFIX: &[u8] = &[0x19, 0x01];

/// Hash the typed agreement message: type descriptor plus the hashes of
/// both text fields. Hashing the fields individually (rather than the
/// concatenated text) makes the encoding unambiguous regardless of field
/// contents.
pub fn agreement_hash(agreement: &ConsentAgreement) -> [u8; 32] {
    blake2b_256_multi(&[
        &blake2b_256(AGREEMENT_TYPE),
        &blake2b_256(agreement.statement.as_bytes()),
        &blake2b_256(agreement.terms_uri.as_bytes()),
    ])
}

/// The final digest a claimant signs: prefix, domain context, message hash.
///
/// Rebuilt from the *current* agreement on every verification, so a
/// signature stays valid only while the text is unchanged.
pub fn consent_digest(domain: &DomainContext, agreement: &ConsentAgreement) -> [u8; 32] {
    blake2b_256_multi(&[SIGNING_PREFIX, domain.as_bytes(), &agreement_hash(agreement)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use passport_crypto::{derive_identity, keypair_from_seed};

    fn domain() -> DomainContext {
        let instance = derive_identity(&keypair_from_seed(&[1u8; 32]).public);
        DomainContext::compute("passport", "1", 1, &instance)
    }

    #[test]
    fn digest_changes_with_statement() {
        let d = domain();
        let a = ConsentAgreement::new("I agree.", "https://t/1");
        let b = ConsentAgreement::new("I agree!", "https://t/1");
        assert_ne!(consent_digest(&d, &a), consent_digest(&d, &b));
    }

    #[test]
    fn digest_changes_with_terms_uri() {
        let d = domain();
        let a = ConsentAgreement::new("I agree.", "https://t/1");
        let b = ConsentAgreement::new("I agree.", "https://t/2");
        assert_ne!(consent_digest(&d, &a), consent_digest(&d, &b));
    }

    #[test]
    fn field_boundaries_are_unambiguous() {
        let d = domain();
        // Moving bytes across the statement/termsURI boundary must change the digest.
        let a = ConsentAgreement::new("ab", "cd");
        let b = ConsentAgreement::new("abc", "d");
        assert_ne!(consent_digest(&d, &a), consent_digest(&d, &b));
    }

    #[test]
    fn digest_changes_with_domain() {
        let a = ConsentAgreement::new("I agree.", "https://t/1");
        let instance = derive_identity(&keypair_from_seed(&[2u8; 32]).public);
        let other = DomainContext::compute("passport", "1", 2, &instance);
        assert_ne!(consent_digest(&domain(), &a), consent_digest(&other, &a));
    }
}

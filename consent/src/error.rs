use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsentError {
    /// The signature does not verify under the claimed signer key.
    #[error("signature does not verify against the current agreement")]
    BadSignature,

    /// The signature verifies, but the signer key does not derive the caller.
    #[error("consent signer does not match caller {0}")]
    SignerMismatch(String),
}

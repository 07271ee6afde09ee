use thiserror::Error;

/// Caller-visible failures of the issuance/revocation engine.
///
/// Every variant is detected before any state mutation; a failing operation
/// leaves the ledger, counters and collaborators untouched.
#[derive(Debug, Error)]
pub enum PassportError {
    #[error("issuance is disabled")]
    IssuanceIsDisabled,

    #[error("issuance limit reached: {issued} of {max}")]
    IssuancesLimitReached { issued: u64, max: u64 },

    #[error("passport already issued to {0}")]
    PassportAlreadyIssued(String),

    #[error("no passport issued to {0}")]
    PassportNotIssued(String),

    #[error("not eligible: balance {balance} below required {required}")]
    NotEligible { balance: u128, required: u128 },

    #[error("non-revocable: balance {balance} at or above floor {floor}")]
    NonRevocable { balance: u128, floor: u128 },

    #[error("invalid consent signature")]
    InvalidSignature,

    #[error("caller {0} is not the administrator")]
    NotAdministrator(String),

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// A fault reported by the membership-token or asset-recovery collaborator.
/// Collaborators fail loudly; their errors propagate unchanged.
#[derive(Debug, Error)]
#[error("membership token fault: {0}")]
pub struct TokenError(pub String);

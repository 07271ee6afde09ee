//! The agreement text a claimant consents to.

use serde::{Deserialize, Serialize};

/// The human-readable agreement a claimant signs before issuance.
///
/// Both fields are mutable by the administrator at any time. Consent
/// signatures are verified against the *current* text, so any edit
/// invalidates every outstanding, unconsumed signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentAgreement {
    /// The statement being agreed to.
    pub statement: String,
    /// URI of the full terms document.
    pub terms_uri: String,
}

impl ConsentAgreement {
    pub fn new(statement: impl Into<String>, terms_uri: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            terms_uri: terms_uri.into(),
        }
    }
}

//! Engine parameters — the administrator-tunable configuration record.

use crate::agreement::ConsentAgreement;
use serde::{Deserialize, Serialize};

/// Balance thresholds governing issuance and third-party revocation.
///
/// No invariant relates the two values: they may overlap or invert, in which
/// case a freshly issued passport can be immediately revocable (or a holder
/// below the claim bar can be safe from revocation). The engine compares
/// against each independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityParams {
    /// Minimum oracle balance required to claim a passport.
    pub claim_required_balance: u128,
    /// Balance floor below which anyone may revoke a holder's passport.
    pub revoke_under_balance: u128,
}

/// The full mutable configuration record handed to the engine.
///
/// Everything here is changeable through the administrator surface; the
/// issuance cap and domain context are deliberately NOT part of this record
/// because they are fixed once at engine construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PassportParams {
    /// Global issuance switch. When false every claim fails, issued
    /// passports are unaffected.
    pub issuance_enabled: bool,
    /// Balance thresholds for claim and revoke eligibility.
    pub eligibility: EligibilityParams,
    /// The agreement text claimants must consent to.
    pub agreement: ConsentAgreement,
}

impl PassportParams {
    /// Conservative defaults: issuance on, claim requires a non-zero locked
    /// balance, revocation opens only when the balance drains completely.
    pub fn passport_defaults() -> Self {
        Self {
            issuance_enabled: true,
            eligibility: EligibilityParams {
                claim_required_balance: 1,
                revoke_under_balance: 1,
            },
            agreement: ConsentAgreement::new(
                "I agree to the passport terms of service.",
                "https://passport.example/terms/v1",
            ),
        }
    }
}

impl Default for PassportParams {
    fn default() -> Self {
        Self::passport_defaults()
    }
}

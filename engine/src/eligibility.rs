//! Claim and revoke eligibility against the balance oracle.

use crate::traits::BalanceOracle;
use passport_types::{EligibilityParams, Identity};

/// Whether `identity` currently holds enough balance to claim a passport.
pub fn can_claim<O: BalanceOracle>(
    oracle: &O,
    params: &EligibilityParams,
    identity: &Identity,
) -> bool {
    oracle.balance_of(identity) >= params.claim_required_balance
}

/// Whether `identity` has fallen far enough to permit third-party
/// revocation.
pub fn can_revoke<O: BalanceOracle>(
    oracle: &O,
    params: &EligibilityParams,
    identity: &Identity,
) -> bool {
    oracle.balance_of(identity) < params.revoke_under_balance
}

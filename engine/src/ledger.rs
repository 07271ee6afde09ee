//! Membership ledger and issuance cap counter.

use crate::error::PassportError;
use passport_types::{Identity, MembershipStatus, TokenId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-identity membership state.
///
/// `token_id` is meaningful only while `status == Issued`; withdrawal clears
/// it back to `TokenId::ZERO`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MembershipRecord {
    pub status: MembershipStatus,
    pub token_id: TokenId,
}

impl Default for MembershipRecord {
    fn default() -> Self {
        Self {
            status: MembershipStatus::NotIssued,
            token_id: TokenId::ZERO,
        }
    }
}

/// Maps identity → membership record and tracks issuances against the cap.
///
/// Identities never written are implicitly `NotIssued`; records are created
/// on first issuance and updated (never removed) on withdrawal. The cap is
/// fixed at construction. `total_issued` only ever increments.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MembershipLedger {
    records: HashMap<Identity, MembershipRecord>,
    total_issued: u64,
    max_issuances: u64,
}

impl MembershipLedger {
    pub fn new(max_issuances: u64) -> Self {
        Self {
            records: HashMap::new(),
            total_issued: 0,
            max_issuances,
        }
    }

    /// Current status of an identity. Pure read; unknown identities are
    /// `NotIssued`.
    pub fn status_of(&self, identity: &Identity) -> MembershipStatus {
        self.records
            .get(identity)
            .map(|r| r.status)
            .unwrap_or_default()
    }

    /// The token id currently held by an identity.
    ///
    /// Fails `PassportNotIssued` unless the identity is `Issued`: a
    /// withdrawn identity has no resolvable token id (absence is signaled,
    /// not a cleared zero value).
    pub fn token_id_of(&self, identity: &Identity) -> Result<TokenId, PassportError> {
        match self.records.get(identity) {
            Some(r) if r.status.holds_token() => Ok(r.token_id),
            _ => Err(PassportError::PassportNotIssued(identity.to_string())),
        }
    }

    /// Record a successful issuance: sets `Issued`, stores the token id and
    /// increments the counter.
    pub fn record_issuance(
        &mut self,
        identity: &Identity,
        token_id: TokenId,
    ) -> Result<(), PassportError> {
        if self.is_exhausted() {
            return Err(PassportError::IssuancesLimitReached {
                issued: self.total_issued,
                max: self.max_issuances,
            });
        }
        if !self.status_of(identity).can_claim() {
            return Err(PassportError::PassportAlreadyIssued(identity.to_string()));
        }
        debug_assert!(!token_id.is_zero(), "minter returned the reserved id 0");

        self.records.insert(
            identity.clone(),
            MembershipRecord {
                status: MembershipStatus::Issued,
                token_id,
            },
        );
        self.total_issued += 1;
        Ok(())
    }

    /// Record a withdrawal: resolves and returns the held token id, sets
    /// `Withdrawn` and clears the association. The counter is untouched.
    pub fn record_withdrawal(&mut self, identity: &Identity) -> Result<TokenId, PassportError> {
        match self.records.get_mut(identity) {
            Some(record) if record.status.holds_token() => {
                let token_id = record.token_id;
                record.status = MembershipStatus::Withdrawn;
                record.token_id = TokenId::ZERO;
                Ok(token_id)
            }
            _ => Err(PassportError::PassportNotIssued(identity.to_string())),
        }
    }

    /// Whether the cap blocks further issuance.
    pub fn is_exhausted(&self) -> bool {
        self.total_issued >= self.max_issuances
    }

    pub fn total_issued(&self) -> u64 {
        self.total_issued
    }

    pub fn max_issuances(&self) -> u64 {
        self.max_issuances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_identity(n: u8) -> Identity {
        Identity::new(format!("pass_{}", format!("{n:02x}").repeat(24)))
    }

    #[test]
    fn unknown_identity_is_not_issued() {
        let ledger = MembershipLedger::new(10);
        assert_eq!(
            ledger.status_of(&test_identity(1)),
            MembershipStatus::NotIssued
        );
        assert!(ledger.token_id_of(&test_identity(1)).is_err());
    }

    #[test]
    fn issuance_sets_status_and_counter() {
        let mut ledger = MembershipLedger::new(10);
        let id = test_identity(1);
        ledger.record_issuance(&id, TokenId::new(7)).unwrap();

        assert_eq!(ledger.status_of(&id), MembershipStatus::Issued);
        assert_eq!(ledger.token_id_of(&id).unwrap(), TokenId::new(7));
        assert_eq!(ledger.total_issued(), 1);
    }

    #[test]
    fn double_issuance_rejected() {
        let mut ledger = MembershipLedger::new(10);
        let id = test_identity(1);
        ledger.record_issuance(&id, TokenId::new(1)).unwrap();

        let result = ledger.record_issuance(&id, TokenId::new(2));
        assert!(matches!(
            result,
            Err(PassportError::PassportAlreadyIssued(_))
        ));
        assert_eq!(ledger.total_issued(), 1);
    }

    #[test]
    fn cap_blocks_issuance() {
        let mut ledger = MembershipLedger::new(1);
        ledger
            .record_issuance(&test_identity(1), TokenId::new(1))
            .unwrap();
        assert!(ledger.is_exhausted());

        let result = ledger.record_issuance(&test_identity(2), TokenId::new(2));
        assert!(matches!(
            result,
            Err(PassportError::IssuancesLimitReached { issued: 1, max: 1 })
        ));
    }

    #[test]
    fn withdrawal_clears_token_and_keeps_counter() {
        let mut ledger = MembershipLedger::new(10);
        let id = test_identity(1);
        ledger.record_issuance(&id, TokenId::new(3)).unwrap();

        let returned = ledger.record_withdrawal(&id).unwrap();
        assert_eq!(returned, TokenId::new(3));
        assert_eq!(ledger.status_of(&id), MembershipStatus::Withdrawn);
        assert_eq!(ledger.total_issued(), 1);
    }

    #[test]
    fn withdrawn_identity_has_no_resolvable_token() {
        let mut ledger = MembershipLedger::new(10);
        let id = test_identity(1);
        ledger.record_issuance(&id, TokenId::new(3)).unwrap();
        ledger.record_withdrawal(&id).unwrap();

        assert!(matches!(
            ledger.token_id_of(&id),
            Err(PassportError::PassportNotIssued(_))
        ));
    }

    #[test]
    fn withdrawn_identity_cannot_be_reissued() {
        let mut ledger = MembershipLedger::new(10);
        let id = test_identity(1);
        ledger.record_issuance(&id, TokenId::new(3)).unwrap();
        ledger.record_withdrawal(&id).unwrap();

        let result = ledger.record_issuance(&id, TokenId::new(4));
        assert!(matches!(
            result,
            Err(PassportError::PassportAlreadyIssued(_))
        ));
    }

    #[test]
    fn withdrawal_of_never_issued_rejected() {
        let mut ledger = MembershipLedger::new(10);
        assert!(matches!(
            ledger.record_withdrawal(&test_identity(1)),
            Err(PassportError::PassportNotIssued(_))
        ));
    }

    #[test]
    fn zero_cap_blocks_everything() {
        let mut ledger = MembershipLedger::new(0);
        assert!(ledger.is_exhausted());
        assert!(ledger
            .record_issuance(&test_identity(1), TokenId::new(1))
            .is_err());
    }
}

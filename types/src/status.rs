//! Membership status enum and its progression rules.

use serde::{Deserialize, Serialize};

/// The membership status of an identity.
///
/// Progression is strictly one-way: `NotIssued → Issued → Withdrawn`.
/// An identity that reaches `Withdrawn` can never be reissued by the engine.
/// Identities never written to the ledger are `NotIssued` (the explicit
/// default, not a zero-initialized placeholder).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MembershipStatus {
    /// No passport has ever been issued to this identity.
    #[default]
    NotIssued,
    /// A passport is currently held.
    Issued,
    /// The passport was relinquished or revoked. Terminal.
    Withdrawn,
}

impl MembershipStatus {
    /// Whether a claim is still possible from this status.
    pub fn can_claim(&self) -> bool {
        matches!(self, Self::NotIssued)
    }

    /// Whether a token id is currently associated with the identity.
    pub fn holds_token(&self) -> bool {
        matches!(self, Self::Issued)
    }

    /// Whether this status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Withdrawn)
    }

    /// Whether `next` is a legal successor of this status.
    pub fn permits_transition_to(&self, next: MembershipStatus) -> bool {
        matches!(
            (self, next),
            (Self::NotIssued, Self::Issued) | (Self::Issued, Self::Withdrawn)
        )
    }
}

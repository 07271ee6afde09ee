//! Collaborator traits consumed by the engine.
//!
//! The balance oracle and the token minter/burner are external systems; the
//! engine only ever talks to them through these seams.

use crate::error::TokenError;
use passport_types::{Identity, TokenId};

/// Read-only source of an identity's currently locked balance.
///
/// Queried fresh on every eligibility check; the engine never caches a
/// balance, so eligibility can change between calls.
pub trait BalanceOracle {
    fn balance_of(&self, identity: &Identity) -> u128;
}

/// The external minter/burner allocating membership token ids.
///
/// Both operations must fail loudly rather than silently no-op. `mint` must
/// never return the reserved id 0.
pub trait MembershipToken {
    fn mint(&mut self, to: &Identity) -> Result<TokenId, TokenError>;
    fn burn(&mut self, id: TokenId) -> Result<(), TokenError>;
}

/// Sweep utility for unrelated assets stranded at the engine's holding
/// address. Only reachable through the administrator surface.
pub trait AssetRecovery {
    fn transfer(
        &mut self,
        asset: &Identity,
        to: &Identity,
        amount: u128,
    ) -> Result<(), TokenError>;
}

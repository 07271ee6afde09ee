//! Nullable collaborators for deterministic testing.
//!
//! The balance oracle and token minter/burner are external systems; these
//! in-memory implementations are controllable, thread-safe, and never touch
//! a network. Clones share state, so a test can keep a handle while the
//! engine owns the collaborator.

use crate::error::TokenError;
use crate::traits::{AssetRecovery, BalanceOracle, MembershipToken};
use passport_types::{Identity, TokenId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// An in-memory balance oracle. Unknown identities report balance 0.
#[derive(Clone, Default)]
pub struct NullOracle {
    balances: Arc<Mutex<HashMap<Identity, u128>>>,
}

impl NullOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an identity's reported balance.
    pub fn set_balance(&self, identity: &Identity, amount: u128) {
        self.balances
            .lock()
            .unwrap()
            .insert(identity.clone(), amount);
    }
}

impl BalanceOracle for NullOracle {
    fn balance_of(&self, identity: &Identity) -> u128 {
        self.balances
            .lock()
            .unwrap()
            .get(identity)
            .copied()
            .unwrap_or(0)
    }
}

#[derive(Default)]
struct NullTokenState {
    next_id: u64,
    minted: HashMap<TokenId, Identity>,
    burned: Vec<TokenId>,
    fail_mint: bool,
    fail_burn: bool,
}

/// An in-memory minter/burner. Ids start at 1; id 0 is never produced.
#[derive(Clone, Default)]
pub struct NullToken {
    state: Arc<Mutex<NullTokenState>>,
}

impl NullToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent mints fail loudly.
    pub fn fail_next_mint(&self, fail: bool) {
        self.state.lock().unwrap().fail_mint = fail;
    }

    /// Make subsequent burns fail loudly.
    pub fn fail_next_burn(&self, fail: bool) {
        self.state.lock().unwrap().fail_burn = fail;
    }

    /// Number of tokens minted so far.
    pub fn minted_count(&self) -> usize {
        self.state.lock().unwrap().minted.len()
    }

    /// Token ids burned so far, in order.
    pub fn burned(&self) -> Vec<TokenId> {
        self.state.lock().unwrap().burned.clone()
    }

    /// The identity a token was minted for, if any.
    pub fn owner_of(&self, id: TokenId) -> Option<Identity> {
        self.state.lock().unwrap().minted.get(&id).cloned()
    }
}

impl MembershipToken for NullToken {
    fn mint(&mut self, to: &Identity) -> Result<TokenId, TokenError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_mint {
            return Err(TokenError("mint rejected".into()));
        }
        state.next_id += 1;
        let id = TokenId::new(state.next_id);
        state.minted.insert(id, to.clone());
        Ok(id)
    }

    fn burn(&mut self, id: TokenId) -> Result<(), TokenError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_burn {
            return Err(TokenError("burn rejected".into()));
        }
        if state.minted.remove(&id).is_none() {
            return Err(TokenError(format!("token {id} was never minted")));
        }
        state.burned.push(id);
        Ok(())
    }
}

/// An in-memory asset-recovery sink recording every sweep.
#[derive(Clone, Default)]
pub struct NullVault {
    transfers: Arc<Mutex<Vec<(Identity, Identity, u128)>>>,
}

impl NullVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transfers(&self) -> Vec<(Identity, Identity, u128)> {
        self.transfers.lock().unwrap().clone()
    }
}

impl AssetRecovery for NullVault {
    fn transfer(
        &mut self,
        asset: &Identity,
        to: &Identity,
        amount: u128,
    ) -> Result<(), TokenError> {
        self.transfers
            .lock()
            .unwrap()
            .push((asset.clone(), to.clone(), amount));
        Ok(())
    }
}

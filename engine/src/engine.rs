//! Issuance/revocation engine — connects consent verification, eligibility,
//! the membership ledger and the external minter/burner into the passport
//! claim/withdraw/revoke workflow.

use crate::eligibility;
use crate::error::PassportError;
use crate::ledger::MembershipLedger;
use crate::traits::{AssetRecovery, BalanceOracle, MembershipToken};
use passport_consent::{verify_consent, ConsentSignature, DomainContext};
use passport_types::{EligibilityParams, Identity, MembershipStatus, PassportParams, TokenId};
use tracing::{debug, info};

/// Events emitted after successful state mutations, carrying final values.
///
/// Revocation (third-party or administrative) has the same effect as a
/// voluntary withdrawal and emits the same event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PassportEvent {
    Issued { identity: Identity, token_id: TokenId },
    Withdrawn { identity: Identity, token_id: TokenId },
}

/// The passport engine.
///
/// Owns the membership ledger and the mutable parameter record; talks to
/// the balance oracle and token minter/burner only through their traits.
/// Collaborators, the issuance cap and the domain context are fixed exactly
/// once at construction — re-initialization is unrepresentable.
///
/// Every mutating operation takes `&mut self`: the exclusive borrow is the
/// serialization discipline. Concurrent callers wrap the engine in a lock
/// or route operations through a single writer.
pub struct PassportEngine<O, T> {
    oracle: O,
    token: T,
    admin: Identity,
    params: PassportParams,
    domain: DomainContext,
    ledger: MembershipLedger,
    /// Pending events for the host to process.
    pending_events: Vec<PassportEvent>,
}

impl<O: BalanceOracle, T: MembershipToken> PassportEngine<O, T> {
    pub fn new(
        oracle: O,
        token: T,
        admin: Identity,
        params: PassportParams,
        max_issuances: u64,
        domain: DomainContext,
    ) -> Self {
        Self {
            oracle,
            token,
            admin,
            params,
            domain,
            ledger: MembershipLedger::new(max_issuances),
            pending_events: Vec::new(),
        }
    }

    // ── Claim ───────────────────────────────────────────────────────────

    /// Claim a passport for `caller`.
    ///
    /// Preconditions, in order, all checked before any mutation:
    /// issuance enabled → cap not exhausted → never issued → balance at or
    /// above the claim bar → consent verifies for the current agreement.
    pub fn claim(
        &mut self,
        caller: &Identity,
        consent: &ConsentSignature,
    ) -> Result<TokenId, PassportError> {
        if !self.params.issuance_enabled {
            return Err(PassportError::IssuanceIsDisabled);
        }
        if self.ledger.is_exhausted() {
            return Err(PassportError::IssuancesLimitReached {
                issued: self.ledger.total_issued(),
                max: self.ledger.max_issuances(),
            });
        }
        if !self.ledger.status_of(caller).can_claim() {
            return Err(PassportError::PassportAlreadyIssued(caller.to_string()));
        }
        let balance = self.oracle.balance_of(caller);
        let required = self.params.eligibility.claim_required_balance;
        if balance < required {
            return Err(PassportError::NotEligible { balance, required });
        }
        verify_consent(&self.domain, &self.params.agreement, consent, caller)
            .map_err(|_| PassportError::InvalidSignature)?;

        let token_id = self.token.mint(caller)?;
        if let Err(e) = self.ledger.record_issuance(caller, token_id) {
            // A mint must not outlive a failed issuance record.
            let _ = self.token.burn(token_id);
            return Err(e);
        }

        info!(identity = %caller, token = %token_id, "passport issued");
        self.pending_events.push(PassportEvent::Issued {
            identity: caller.clone(),
            token_id,
        });
        Ok(token_id)
    }

    // ── Withdraw / revoke ───────────────────────────────────────────────

    /// Voluntarily relinquish `caller`'s passport. No eligibility check.
    pub fn withdraw(&mut self, caller: &Identity) -> Result<(), PassportError> {
        self.burn_and_withdraw(caller)
    }

    /// Revoke `target`'s passport, callable by anyone, permitted only while
    /// the target's balance sits below the revocation floor.
    pub fn revoke(&mut self, target: &Identity) -> Result<(), PassportError> {
        let balance = self.oracle.balance_of(target);
        let floor = self.params.eligibility.revoke_under_balance;
        if balance >= floor {
            return Err(PassportError::NonRevocable { balance, floor });
        }
        self.burn_and_withdraw(target)
    }

    /// Administrative revocation: same effect as a withdrawal, no balance
    /// check, administrator only.
    pub fn admin_revoke(
        &mut self,
        caller: &Identity,
        target: &Identity,
    ) -> Result<(), PassportError> {
        self.require_admin(caller)?;
        self.burn_and_withdraw(target)
    }

    /// Shared withdrawal path: resolve the held token, burn it, record the
    /// withdrawal. The burn runs before any ledger mutation so a burner
    /// fault leaves the membership intact.
    fn burn_and_withdraw(&mut self, target: &Identity) -> Result<(), PassportError> {
        let token_id = self.ledger.token_id_of(target)?;
        self.token.burn(token_id)?;
        self.ledger.record_withdrawal(target)?;

        info!(identity = %target, token = %token_id, "passport withdrawn");
        self.pending_events.push(PassportEvent::Withdrawn {
            identity: target.clone(),
            token_id,
        });
        Ok(())
    }

    // ── Administrative surface ──────────────────────────────────────────

    fn require_admin(&self, caller: &Identity) -> Result<(), PassportError> {
        if caller != &self.admin {
            return Err(PassportError::NotAdministrator(caller.to_string()));
        }
        Ok(())
    }

    pub fn set_eligibility_params(
        &mut self,
        caller: &Identity,
        eligibility: EligibilityParams,
    ) -> Result<(), PassportError> {
        self.require_admin(caller)?;
        debug!(
            claim_required = eligibility.claim_required_balance,
            revoke_under = eligibility.revoke_under_balance,
            "eligibility params updated"
        );
        self.params.eligibility = eligibility;
        Ok(())
    }

    pub fn set_issuance_enabled(
        &mut self,
        caller: &Identity,
        enabled: bool,
    ) -> Result<(), PassportError> {
        self.require_admin(caller)?;
        debug!(enabled, "issuance switch updated");
        self.params.issuance_enabled = enabled;
        Ok(())
    }

    /// Replace the agreement statement. Outstanding consent signatures stop
    /// verifying from this point on.
    pub fn set_agreement_statement(
        &mut self,
        caller: &Identity,
        statement: impl Into<String>,
    ) -> Result<(), PassportError> {
        self.require_admin(caller)?;
        self.params.agreement.statement = statement.into();
        debug!("agreement statement updated");
        Ok(())
    }

    /// Replace the agreement terms URI. Outstanding consent signatures stop
    /// verifying from this point on.
    pub fn set_agreement_terms_uri(
        &mut self,
        caller: &Identity,
        terms_uri: impl Into<String>,
    ) -> Result<(), PassportError> {
        self.require_admin(caller)?;
        self.params.agreement.terms_uri = terms_uri.into();
        debug!("agreement terms URI updated");
        Ok(())
    }

    /// Sweep an unrelated asset stranded at the engine's holding address.
    pub fn recover_assets<R: AssetRecovery>(
        &mut self,
        caller: &Identity,
        vault: &mut R,
        asset: &Identity,
        to: &Identity,
        amount: u128,
    ) -> Result<(), PassportError> {
        self.require_admin(caller)?;
        vault.transfer(asset, to, amount)?;
        info!(asset = %asset, to = %to, amount, "stray asset recovered");
        Ok(())
    }

    // ── Reads ───────────────────────────────────────────────────────────

    pub fn status_of(&self, identity: &Identity) -> MembershipStatus {
        self.ledger.status_of(identity)
    }

    pub fn token_id_of(&self, identity: &Identity) -> Result<TokenId, PassportError> {
        self.ledger.token_id_of(identity)
    }

    pub fn can_claim(&self, identity: &Identity) -> bool {
        eligibility::can_claim(&self.oracle, &self.params.eligibility, identity)
    }

    pub fn can_revoke(&self, identity: &Identity) -> bool {
        eligibility::can_revoke(&self.oracle, &self.params.eligibility, identity)
    }

    pub fn total_issued(&self) -> u64 {
        self.ledger.total_issued()
    }

    pub fn max_issuances(&self) -> u64 {
        self.ledger.max_issuances()
    }

    pub fn params(&self) -> &PassportParams {
        &self.params
    }

    pub fn domain(&self) -> &DomainContext {
        &self.domain
    }

    /// Drain pending events for the host to process.
    pub fn drain_events(&mut self) -> Vec<PassportEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

//! Membership passport engine.
//!
//! Orchestrates the full passport lifecycle: balance-gated claims with
//! signed consent, voluntary withdrawal, third-party revocation below a
//! balance floor and administrative overrides. External systems (balance
//! oracle, token minter/burner) are reached through traits; in-memory
//! nullable implementations back the test suites.

pub mod eligibility;
mod engine;
mod error;
mod ledger;
pub mod nullables;
mod traits;

pub use engine::{PassportEngine, PassportEvent};
pub use error::{PassportError, TokenError};
pub use ledger::{MembershipLedger, MembershipRecord};
pub use traits::{AssetRecovery, BalanceOracle, MembershipToken};

//! # split-engine
//!
//! Shared-group expense tracking and minimal-transfer settlement engine.
//!
//! Given a roster of group members and an ordered list of who-paid-what
//! expense records, this engine derives each member's net balance against
//! an equal-share baseline and produces a short list of directed transfers
//! that settles every balance to zero.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: participants, expenses, groups, errors
//! - **engine** — Balance derivation and greedy creditor/debtor matching
//! - **simulation** — Random group generation for stress testing

pub mod core;
pub mod engine;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::error::SplitError;
    pub use crate::core::expense::{Expense, ExpenseLog};
    pub use crate::core::group::Group;
    pub use crate::core::participant::ParticipantId;
    pub use crate::engine::balance::BalanceSheet;
    pub use crate::engine::settlement::{SettlementEngine, SettlementPlan, Transfer};
}

use crate::core::participant::ParticipantId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by group bookkeeping and the settlement engine.
///
/// All of these are validation failures: they stem from invalid input,
/// not transient conditions, so none are retryable. The engine never
/// returns partial results alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("group has no members")]
    EmptyGroup,

    #[error("member name cannot be blank")]
    EmptyName,

    #[error("member '{0}' is already in the group")]
    DuplicateMember(String),

    #[error("expense payer '{payer}' is not a group member")]
    UnknownPayer { payer: ParticipantId },

    #[error("expense amount must be positive, got {amount}")]
    InvalidAmount { amount: Decimal },

    #[error("balances do not net to zero: residual {residual} exceeds the rounding slack")]
    Unbalanced { residual: Decimal },
}

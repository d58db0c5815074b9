use crate::core::error::SplitError;
use crate::core::expense::{Expense, ExpenseLog};
use crate::core::participant::ParticipantId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The running state of an expense group: a member roster and the
/// ordered log of recorded expenses.
///
/// `Group` is the bookkeeping side of the system. It owns the canonical
/// participant and expense lists and enforces their invariants at entry
/// time (no duplicate members, no blank names, no unknown payers, no
/// non-positive amounts). The settlement engine reads immutable
/// snapshots of this state and never mutates it.
///
/// The serde representation uses `members` and `expenses` field names,
/// so a group round-trips through the JSON document shape consumed by
/// the command-line front end.
///
/// # Examples
///
/// ```
/// use split_engine::core::group::Group;
/// use split_engine::core::participant::ParticipantId;
/// use rust_decimal_macros::dec;
///
/// let mut group = Group::new();
/// group.add_member("alice").unwrap();
/// group.add_member("bob").unwrap();
/// group.record_expense(&ParticipantId::new("alice"), dec!(50)).unwrap();
///
/// assert_eq!(group.members().len(), 2);
/// assert_eq!(group.expenses().total(), dec!(50));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    members: Vec<ParticipantId>,
    expenses: ExpenseLog,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member to the roster.
    ///
    /// The name is trimmed first. Blank names and duplicates are
    /// rejected; members are never removed except by [`reset`].
    ///
    /// [`reset`]: Group::reset
    pub fn add_member(&mut self, name: impl Into<String>) -> Result<(), SplitError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(SplitError::EmptyName);
        }
        let id = ParticipantId::new(name);
        if self.members.contains(&id) {
            return Err(SplitError::DuplicateMember(name.to_string()));
        }
        self.members.push(id);
        Ok(())
    }

    /// Record an expense paid by `payer`.
    ///
    /// The payer must already be on the roster and the amount must be
    /// positive. Records are append-only.
    pub fn record_expense(
        &mut self,
        payer: &ParticipantId,
        amount: Decimal,
    ) -> Result<(), SplitError> {
        if !self.members.contains(payer) {
            return Err(SplitError::UnknownPayer {
                payer: payer.clone(),
            });
        }
        if amount <= Decimal::ZERO {
            return Err(SplitError::InvalidAmount { amount });
        }
        self.expenses.add(Expense::new(payer.clone(), amount));
        Ok(())
    }

    /// Clear the roster and the expense log.
    pub fn reset(&mut self) {
        self.members.clear();
        self.expenses = ExpenseLog::new();
    }

    /// The roster, in the order members were added.
    pub fn members(&self) -> &[ParticipantId] {
        &self.members
    }

    /// The expense log, in recording order.
    pub fn expenses(&self) -> &ExpenseLog {
        &self.expenses
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

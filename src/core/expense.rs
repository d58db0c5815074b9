use crate::core::participant::ParticipantId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single who-paid-what record.
///
/// Expenses are immutable once recorded: there is no editing or
/// deletion, only a full group reset. The amount is not validated at
/// construction time; the balance computation rejects non-positive
/// amounts before producing any output, and [`Group::record_expense`]
/// rejects them at entry time.
///
/// [`Group::record_expense`]: crate::core::group::Group::record_expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// The member who paid.
    payer: ParticipantId,
    /// The amount paid. Expected to be positive.
    amount: Decimal,
}

impl Expense {
    /// Create a new expense record.
    pub fn new(payer: ParticipantId, amount: Decimal) -> Self {
        Self { payer, amount }
    }

    pub fn payer(&self) -> &ParticipantId {
        &self.payer
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// An ordered, append-only collection of expense records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseLog {
    expenses: Vec<Expense>,
}

impl ExpenseLog {
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
        }
    }

    pub fn add(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Total of all recorded amounts.
    pub fn total(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount()).sum()
    }

    /// All unique payers referenced in this log.
    pub fn payers(&self) -> Vec<ParticipantId> {
        let mut payers: Vec<ParticipantId> = self
            .expenses
            .iter()
            .map(|e| e.payer().clone())
            .collect();
        payers.sort();
        payers.dedup();
        payers
    }
}

impl FromIterator<Expense> for ExpenseLog {
    fn from_iter<T: IntoIterator<Item = Expense>>(iter: T) -> Self {
        Self {
            expenses: iter.into_iter().collect(),
        }
    }
}

use crate::core::error::SplitError;
use crate::core::expense::ExpenseLog;
use crate::core::participant::ParticipantId;
use crate::engine::{rounding_slack, SETTLED_TOLERANCE};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Each participant's net position against the equal-share baseline.
///
/// A positive balance means the participant is owed money (net
/// creditor); a negative balance means they owe (net debtor). Entries
/// keep the roster's encounter order, which the settlement matcher
/// relies on for deterministic output.
///
/// A balance sheet is derived state: it is recomputed from the roster
/// and expense log on every settlement request and never persisted.
///
/// # Examples
///
/// ```
/// use split_engine::core::expense::{Expense, ExpenseLog};
/// use split_engine::core::participant::ParticipantId;
/// use split_engine::engine::balance::BalanceSheet;
/// use rust_decimal_macros::dec;
///
/// let members: Vec<ParticipantId> =
///     ["alice", "bob", "carol"].map(ParticipantId::new).into();
/// let mut log = ExpenseLog::new();
/// log.add(Expense::new(ParticipantId::new("alice"), dec!(90)));
///
/// let sheet = BalanceSheet::compute(&members, &log).unwrap();
/// assert_eq!(sheet.balance(&ParticipantId::new("alice")), dec!(60));
/// assert_eq!(sheet.balance(&ParticipantId::new("bob")), dec!(-30));
/// assert_eq!(sheet.equal_share(), dec!(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// (participant, net balance) in roster order.
    entries: Vec<(ParticipantId, Decimal)>,
    /// Sum of all recorded expense amounts.
    total: Decimal,
    /// The per-head share, rounded to two decimals for display.
    equal_share: Decimal,
}

impl BalanceSheet {
    /// Derive balances for `participants` from the expense log.
    ///
    /// Every expense is validated before anything is computed: an empty
    /// roster, a payer outside the roster, or a non-positive amount
    /// fails the whole request and nothing is returned.
    ///
    /// Each balance is `paid - total / n`, rounded to two decimal
    /// places once, after the subtraction. Rounding intermediate sums
    /// instead would compound the error across participants.
    ///
    /// Callers must supply a duplicate-free roster; [`Group`] enforces
    /// this at entry time.
    ///
    /// [`Group`]: crate::core::group::Group
    pub fn compute(
        participants: &[ParticipantId],
        expenses: &ExpenseLog,
    ) -> Result<Self, SplitError> {
        if participants.is_empty() {
            return Err(SplitError::EmptyGroup);
        }

        let roster: HashSet<&ParticipantId> = participants.iter().collect();
        for expense in expenses.expenses() {
            if !roster.contains(expense.payer()) {
                return Err(SplitError::UnknownPayer {
                    payer: expense.payer().clone(),
                });
            }
            if expense.amount() <= Decimal::ZERO {
                return Err(SplitError::InvalidAmount {
                    amount: expense.amount(),
                });
            }
        }

        let total = expenses.total();
        let share = total / Decimal::from(participants.len() as u64);

        let mut paid: HashMap<&ParticipantId, Decimal> = HashMap::new();
        for expense in expenses.expenses() {
            *paid.entry(expense.payer()).or_insert(Decimal::ZERO) += expense.amount();
        }

        let entries = participants
            .iter()
            .map(|p| {
                let paid_by = paid.get(p).copied().unwrap_or(Decimal::ZERO);
                (p.clone(), (paid_by - share).round_dp(2))
            })
            .collect();

        log::debug!(
            "computed balances for {} participants, total {}",
            participants.len(),
            total
        );

        Ok(Self {
            entries,
            total,
            equal_share: share.round_dp(2),
        })
    }

    /// Build a sheet from an existing balance mapping.
    ///
    /// The settlement matcher consumes any balance mapping, not only
    /// ones produced by [`compute`]; this constructor is the seam for
    /// callers that derive balances elsewhere.
    ///
    /// [`compute`]: BalanceSheet::compute
    pub fn from_entries(
        entries: Vec<(ParticipantId, Decimal)>,
        total: Decimal,
        equal_share: Decimal,
    ) -> Self {
        Self {
            entries,
            total,
            equal_share,
        }
    }

    /// All entries, in roster order.
    pub fn entries(&self) -> &[(ParticipantId, Decimal)] {
        &self.entries
    }

    /// The net balance of a participant, zero if unknown.
    pub fn balance(&self, participant: &ParticipantId) -> Decimal {
        self.entries
            .iter()
            .find(|(p, _)| p == participant)
            .map(|(_, b)| *b)
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of all recorded expense amounts.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// The per-head share, rounded to two decimals.
    pub fn equal_share(&self) -> Decimal {
        self.equal_share
    }

    pub fn participant_count(&self) -> usize {
        self.entries.len()
    }

    /// Participants owed money, with their credit, in encounter order.
    pub fn creditors(&self) -> Vec<(ParticipantId, Decimal)> {
        self.entries
            .iter()
            .filter(|(_, b)| *b >= SETTLED_TOLERANCE)
            .cloned()
            .collect()
    }

    /// Participants owing money, with their (negative) balance, in
    /// encounter order.
    pub fn debtors(&self) -> Vec<(ParticipantId, Decimal)> {
        self.entries
            .iter()
            .filter(|(_, b)| *b <= -SETTLED_TOLERANCE)
            .cloned()
            .collect()
    }

    /// Whether the balances net to zero within the rounding slack.
    pub fn is_balanced(&self) -> bool {
        let sum: Decimal = self.entries.iter().map(|(_, b)| *b).sum();
        sum.abs() <= rounding_slack(self.entries.len())
    }
}

impl fmt::Display for BalanceSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Balances ===")?;
        writeln!(f, "Total Spent:  {}", self.total)?;
        writeln!(f, "Equal Share:  {}", self.equal_share)?;
        for (participant, balance) in &self.entries {
            let status = if *balance >= SETTLED_TOLERANCE {
                "creditor"
            } else if *balance <= -SETTLED_TOLERANCE {
                "debtor"
            } else {
                "settled"
            };
            writeln!(
                f,
                "  {:<16} {:>12}  {}",
                participant.to_string(),
                balance.to_string(),
                status
            )?;
        }
        Ok(())
    }
}

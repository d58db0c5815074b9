use crate::core::error::SplitError;
use crate::core::participant::ParticipantId;
use crate::engine::balance::BalanceSheet;
use crate::engine::rounding_slack;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single directed settlement instruction: `from` pays `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Decimal,
}

impl Transfer {
    pub fn new(from: ParticipantId, to: ParticipantId, amount: Decimal) -> Self {
        Self { from, to, amount }
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} owes {} {}", self.from, self.to, self.amount)
    }
}

/// The result of one settlement request: the transfer list plus the
/// summary totals carried over from the balance sheet.
///
/// A plan exists only for the duration of one report; it is never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementPlan {
    transfers: Vec<Transfer>,
    total: Decimal,
    equal_share: Decimal,
}

impl SettlementPlan {
    /// The transfers, in the order they were matched.
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn transfer_count(&self) -> usize {
        self.transfers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }

    /// Sum of all recorded expense amounts.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// The per-head share, rounded to two decimals.
    pub fn equal_share(&self) -> Decimal {
        self.equal_share
    }

    /// Total amount this participant pays out under the plan.
    pub fn paid_by(&self, participant: &ParticipantId) -> Decimal {
        self.transfers
            .iter()
            .filter(|t| &t.from == participant)
            .map(|t| t.amount)
            .sum()
    }

    /// Total amount this participant receives under the plan.
    pub fn received_by(&self, participant: &ParticipantId) -> Decimal {
        self.transfers
            .iter()
            .filter(|t| &t.to == participant)
            .map(|t| t.amount)
            .sum()
    }
}

impl fmt::Display for SettlementPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Settlement Plan ===")?;
        writeln!(f, "Total Spent:  {}", self.total)?;
        writeln!(f, "Equal Share:  {}", self.equal_share)?;
        writeln!(f, "Transfers:    {}", self.transfers.len())?;
        if self.transfers.is_empty() {
            writeln!(f, "\nEveryone is settled; no transfers needed.")?;
        } else {
            writeln!(f)?;
            for transfer in &self.transfers {
                writeln!(f, "{}", transfer)?;
            }
        }
        Ok(())
    }
}

/// The settlement matcher.
///
/// Pairs debtors with creditors greedily to eliminate all balances in
/// few transactions. The result is order-dependent but deterministic:
/// both partitions keep the balance sheet's encounter order, and no
/// global transaction-count minimization is attempted.
pub struct SettlementEngine;

impl SettlementEngine {
    /// Compute the transfer list that settles the given balances.
    ///
    /// # Algorithm
    ///
    /// Two cursors scan the debtor and creditor partitions. Each step
    /// transfers `min(outstanding debt, outstanding credit)` from the
    /// current debtor to the current creditor, then advances whichever
    /// cursor's remainder rounds to zero at two decimals (possibly
    /// both). Because total credit equals total debt up to rounding,
    /// the cursors exhaust together; a leftover beyond the rounding
    /// slack means the input mapping was corrupt and is reported as
    /// [`SplitError::Unbalanced`] rather than silently dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use split_engine::core::expense::{Expense, ExpenseLog};
    /// use split_engine::core::participant::ParticipantId;
    /// use split_engine::engine::balance::BalanceSheet;
    /// use split_engine::engine::settlement::SettlementEngine;
    /// use rust_decimal_macros::dec;
    ///
    /// let members: Vec<ParticipantId> =
    ///     ["alice", "bob", "carol"].map(ParticipantId::new).into();
    /// let mut log = ExpenseLog::new();
    /// log.add(Expense::new(ParticipantId::new("alice"), dec!(90)));
    ///
    /// let sheet = BalanceSheet::compute(&members, &log).unwrap();
    /// let plan = SettlementEngine::settle(&sheet).unwrap();
    ///
    /// assert_eq!(plan.transfer_count(), 2);
    /// assert_eq!(plan.transfers()[0].from.as_str(), "bob");
    /// assert_eq!(plan.transfers()[0].to.as_str(), "alice");
    /// assert_eq!(plan.transfers()[0].amount, dec!(30));
    /// ```
    pub fn settle(sheet: &BalanceSheet) -> Result<SettlementPlan, SplitError> {
        // Outstanding magnitudes, in encounter order.
        let mut debtors: Vec<(ParticipantId, Decimal)> = sheet
            .debtors()
            .into_iter()
            .map(|(p, b)| (p, -b))
            .collect();
        let mut creditors: Vec<(ParticipantId, Decimal)> = sheet.creditors();

        let mut transfers = Vec::new();
        let mut i = 0;
        let mut j = 0;

        while i < debtors.len() && j < creditors.len() {
            let amount = debtors[i].1.min(creditors[j].1).round_dp(2);
            debug_assert!(amount > Decimal::ZERO);
            log::debug!("{} pays {} {}", debtors[i].0, creditors[j].0, amount);
            transfers.push(Transfer::new(
                debtors[i].0.clone(),
                creditors[j].0.clone(),
                amount,
            ));

            debtors[i].1 -= amount;
            creditors[j].1 -= amount;

            if debtors[i].1.round_dp(2).is_zero() {
                i += 1;
            }
            if creditors[j].1.round_dp(2).is_zero() {
                j += 1;
            }
        }

        let leftover_debt: Decimal = debtors[i..].iter().map(|(_, d)| *d).sum();
        let leftover_credit: Decimal = creditors[j..].iter().map(|(_, c)| *c).sum();
        let residual = leftover_debt.max(leftover_credit);
        if residual > rounding_slack(sheet.participant_count()) {
            return Err(SplitError::Unbalanced {
                residual: residual.round_dp(2),
            });
        }

        Ok(SettlementPlan {
            transfers,
            total: sheet.total(),
            equal_share: sheet.equal_share(),
        })
    }
}

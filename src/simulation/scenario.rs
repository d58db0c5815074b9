//! Random group generation for stress testing.
//!
//! Builds groups with arbitrary rosters and expense logs to exercise
//! the balance and settlement engines under load.

use crate::core::group::Group;
use crate::core::participant::ParticipantId;
use rand::Rng;
use rust_decimal::Decimal;

/// Configuration for generating a random expense group.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Number of members on the roster.
    pub member_count: usize,
    /// Number of expense records to generate.
    pub expense_count: usize,
    /// Minimum expense amount, in cents.
    pub min_cents: u64,
    /// Maximum expense amount, in cents.
    pub max_cents: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            member_count: 8,
            expense_count: 24,
            min_cents: 100,
            max_cents: 50_000,
        }
    }
}

/// Generate a random group for testing.
///
/// Members are named `member-000`, `member-001`, ... and every expense
/// is drawn in whole cents, so generated data is exactly two-decimal.
pub fn generate_random_group(config: &ScenarioConfig) -> Group {
    let mut rng = rand::thread_rng();
    let mut group = Group::new();

    for i in 0..config.member_count {
        // Numbered names are unique, so this cannot fail.
        let _ = group.add_member(format!("member-{:03}", i));
    }

    let members: Vec<ParticipantId> = group.members().to_vec();
    for _ in 0..config.expense_count {
        let payer = &members[rng.gen_range(0..members.len())];
        let cents = rng.gen_range(config.min_cents..=config.max_cents);
        let amount = Decimal::new(cents as i64, 2);
        let _ = group.record_expense(payer, amount);
    }

    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::balance::BalanceSheet;
    use crate::engine::settlement::SettlementEngine;

    #[test]
    fn test_generated_group_matches_config() {
        let config = ScenarioConfig {
            member_count: 5,
            expense_count: 12,
            ..Default::default()
        };

        let group = generate_random_group(&config);
        assert_eq!(group.member_count(), 5);
        assert_eq!(group.expenses().len(), 12);
    }

    #[test]
    fn test_generated_group_always_settles() {
        let config = ScenarioConfig::default();
        for _ in 0..10 {
            let group = generate_random_group(&config);
            let sheet = BalanceSheet::compute(group.members(), group.expenses()).unwrap();
            assert!(sheet.is_balanced());
            let plan = SettlementEngine::settle(&sheet).unwrap();
            for transfer in plan.transfers() {
                assert!(transfer.amount > Decimal::ZERO);
                assert_ne!(transfer.from, transfer.to);
            }
        }
    }
}

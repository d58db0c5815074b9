use proptest::prelude::*;
use rust_decimal::Decimal;
use split_engine::core::expense::{Expense, ExpenseLog};
use split_engine::core::participant::ParticipantId;
use split_engine::engine::balance::BalanceSheet;
use split_engine::engine::settlement::SettlementEngine;
use split_engine::engine::rounding_slack;

const NAME_POOL: [&str; 6] = ["alice", "bob", "carol", "dave", "erin", "frank"];

/// Generate a roster of 1..=6 unique members plus an expense log whose
/// payers are all on the roster. Amounts are whole cents.
fn arb_group() -> impl Strategy<Value = (Vec<ParticipantId>, ExpenseLog)> {
    (1usize..=NAME_POOL.len()).prop_flat_map(|n| {
        let members: Vec<ParticipantId> =
            NAME_POOL[..n].iter().map(|s| ParticipantId::new(*s)).collect();
        prop::collection::vec((0..n, 1u64..50_000u64), 0..40).prop_map(move |raw| {
            let log: ExpenseLog = raw
                .into_iter()
                .map(|(payer, cents)| {
                    Expense::new(members[payer].clone(), Decimal::new(cents as i64, 2))
                })
                .collect();
            (members.clone(), log)
        })
    })
}

proptest! {
    // ===================================================================
    // INVARIANT 1: Balances always net to zero within the rounding slack.
    //
    // Each balance is rounded to two decimals after subtracting the
    // equal share, so the sum can drift by at most half a cent per
    // member. Beyond that, money has been created or destroyed.
    // ===================================================================
    #[test]
    fn balances_net_to_zero((members, log) in arb_group()) {
        let sheet = BalanceSheet::compute(&members, &log).unwrap();
        let sum: Decimal = sheet.entries().iter().map(|(_, b)| *b).sum();
        prop_assert!(
            sum.abs() <= rounding_slack(members.len()),
            "Balance sum {} exceeds the rounding slack for {} members",
            sum,
            members.len()
        );
        prop_assert!(sheet.is_balanced());
    }

    // ===================================================================
    // INVARIANT 2: Every valid group settles without error.
    //
    // The matcher must never report a balance sheet it derived itself
    // as corrupt, whatever the rounding residue.
    // ===================================================================
    #[test]
    fn valid_groups_always_settle((members, log) in arb_group()) {
        let sheet = BalanceSheet::compute(&members, &log).unwrap();
        prop_assert!(
            SettlementEngine::settle(&sheet).is_ok(),
            "Settlement must succeed for engine-derived balances"
        );
    }

    // ===================================================================
    // INVARIANT 3: Conservation per participant.
    //
    // Each debtor pays out their debt magnitude and each creditor
    // receives their credit, both within the rounding slack.
    // ===================================================================
    #[test]
    fn transfers_conserve_balances((members, log) in arb_group()) {
        let sheet = BalanceSheet::compute(&members, &log).unwrap();
        let plan = SettlementEngine::settle(&sheet).unwrap();
        let slack = rounding_slack(members.len());

        for (participant, balance) in sheet.entries() {
            let paid = plan.paid_by(participant);
            let received = plan.received_by(participant);
            let moved = received - paid;
            prop_assert!(
                (moved - balance).abs() <= slack,
                "{} has balance {} but the plan moves {}",
                participant,
                balance,
                moved
            );
        }
    }

    // ===================================================================
    // INVARIANT 4: Settlement is deterministic.
    //
    // Identical inputs produce identical transfer lists. No randomness,
    // no hidden state.
    // ===================================================================
    #[test]
    fn settlement_is_deterministic((members, log) in arb_group()) {
        let sheet1 = BalanceSheet::compute(&members, &log).unwrap();
        let sheet2 = BalanceSheet::compute(&members, &log).unwrap();
        prop_assert_eq!(&sheet1, &sheet2);

        let plan1 = SettlementEngine::settle(&sheet1).unwrap();
        let plan2 = SettlementEngine::settle(&sheet2).unwrap();
        prop_assert_eq!(plan1, plan2);
    }

    // ===================================================================
    // INVARIANT 5: Transfers are well-formed.
    //
    // Every transfer moves a positive amount between distinct members,
    // and the greedy matcher emits at most one transfer per cursor
    // advance: never more than debtors + creditors instructions.
    // ===================================================================
    #[test]
    fn transfers_are_well_formed((members, log) in arb_group()) {
        let sheet = BalanceSheet::compute(&members, &log).unwrap();
        let plan = SettlementEngine::settle(&sheet).unwrap();

        for transfer in plan.transfers() {
            prop_assert!(transfer.amount > Decimal::ZERO);
            prop_assert_ne!(&transfer.from, &transfer.to);
        }

        let bound = sheet.debtors().len() + sheet.creditors().len();
        prop_assert!(
            plan.transfer_count() <= bound,
            "{} transfers for {} debtors and {} creditors",
            plan.transfer_count(),
            sheet.debtors().len(),
            sheet.creditors().len()
        );
    }

    // ===================================================================
    // INVARIANT 6: Summary scalars flow through unchanged.
    //
    // The plan reports the same total and equal share as the balance
    // sheet it was derived from, and the total matches the raw log.
    // ===================================================================
    #[test]
    fn summary_scalars_flow_through((members, log) in arb_group()) {
        let sheet = BalanceSheet::compute(&members, &log).unwrap();
        let plan = SettlementEngine::settle(&sheet).unwrap();

        prop_assert_eq!(plan.total(), sheet.total());
        prop_assert_eq!(plan.equal_share(), sheet.equal_share());
        prop_assert_eq!(sheet.total(), log.total());
    }
}

//! Weekend trip walkthrough.
//!
//! Three friends share a trip; one fronts most of the money. The
//! engine derives balances against the equal share and produces the
//! transfers that square everyone up.

use rust_decimal_macros::dec;
use split_engine::core::group::Group;
use split_engine::core::participant::ParticipantId;
use split_engine::engine::balance::BalanceSheet;
use split_engine::engine::settlement::SettlementEngine;

fn main() {
    println!("╔══════════════════════════════════════╗");
    println!("║  split-engine: Weekend Trip Example  ║");
    println!("╚══════════════════════════════════════╝\n");

    let mut group = Group::new();
    for name in ["alice", "bob", "carol"] {
        group.add_member(name).expect("fresh roster");
    }

    let alice = ParticipantId::new("alice");
    let carol = ParticipantId::new("carol");

    println!("Expenses:");
    println!("  alice paid 90.00 for the cabin");
    println!("  alice paid 36.50 for groceries");
    println!("  carol paid 22.00 for fuel\n");

    group.record_expense(&alice, dec!(90)).expect("member on roster");
    group.record_expense(&alice, dec!(36.50)).expect("member on roster");
    group.record_expense(&carol, dec!(22)).expect("member on roster");

    let sheet = BalanceSheet::compute(group.members(), group.expenses())
        .expect("roster is non-empty and every payer is a member");
    println!("{}", sheet);

    let plan = SettlementEngine::settle(&sheet).expect("engine-derived balances");
    println!("{}", plan);
}

//! Shared house walkthrough.
//!
//! Five flatmates, a month of bills, several payers. Shows how the
//! greedy matcher settles everyone with fewer transfers than the
//! all-pairs worst case.

use rust_decimal_macros::dec;
use split_engine::core::group::Group;
use split_engine::core::participant::ParticipantId;
use split_engine::engine::balance::BalanceSheet;
use split_engine::engine::settlement::SettlementEngine;

fn main() {
    println!("╔══════════════════════════════════════╗");
    println!("║  split-engine: Shared House Example  ║");
    println!("╚══════════════════════════════════════╝\n");

    let mut group = Group::new();
    for name in ["ana", "ben", "chris", "dana", "eli"] {
        group.add_member(name).expect("fresh roster");
    }

    println!("A month of bills:");
    println!("  ana   paid 420.00 rent deposit top-up");
    println!("  ben   paid  96.40 utilities");
    println!("  chris paid  61.25 internet and streaming");
    println!("  dana  paid 183.70 groceries\n");

    for (name, amount) in [
        ("ana", dec!(420)),
        ("ben", dec!(96.40)),
        ("chris", dec!(61.25)),
        ("dana", dec!(183.70)),
    ] {
        group
            .record_expense(&ParticipantId::new(name), amount)
            .expect("member on roster");
    }

    let sheet = BalanceSheet::compute(group.members(), group.expenses())
        .expect("roster is non-empty and every payer is a member");
    println!("{}", sheet);

    let plan = SettlementEngine::settle(&sheet).expect("engine-derived balances");
    println!("{}", plan);

    let naive_worst_case = sheet.debtors().len() * sheet.creditors().len();
    println!(
        "Greedy matching used {} transfers (all-pairs worst case: {}).",
        plan.transfer_count(),
        naive_worst_case
    );
}

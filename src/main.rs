//! split-engine CLI
//!
//! Settle shared-group expenses from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Settle a group from a JSON file
//! split-engine settle --input group.json
//!
//! # Output as JSON
//! split-engine settle --input group.json --format json
//!
//! # Generate a random group for testing
//! split-engine generate --members 8 --expenses 24
//! ```

use log::info;
use rust_decimal::Decimal;
use split_engine::core::expense::{Expense, ExpenseLog};
use split_engine::core::participant::ParticipantId;
use split_engine::engine::balance::BalanceSheet;
use split_engine::engine::settlement::SettlementEngine;
use split_engine::simulation::scenario::{generate_random_group, ScenarioConfig};
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"split-engine — shared-group expense splitting and settlement

USAGE:
    split-engine <COMMAND> [OPTIONS]

COMMANDS:
    settle      Compute balances and the settlement transfer list
    generate    Generate a random group document (for testing)
    help        Show this message

OPTIONS (settle):
    --input <FILE>      Path to JSON group file
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (generate):
    --members <N>       Number of group members (default: 8)
    --expenses <N>      Number of expense records (default: 24)
    --output <FILE>     Write to file instead of stdout

EXAMPLES:
    split-engine settle --input group.json
    split-engine settle --input group.json --format json
    split-engine generate --members 5 --expenses 12 --output group.json"#
    );
}

/// JSON schema for the input group document.
#[derive(serde::Deserialize)]
struct GroupFile {
    members: Vec<String>,
    expenses: Vec<ExpenseInput>,
}

#[derive(serde::Deserialize)]
struct ExpenseInput {
    payer: String,
    amount: String,
}

/// JSON output schema for settlement results.
#[derive(serde::Serialize)]
struct SettleOutput {
    total: String,
    equal_share: String,
    transfer_count: usize,
    balances: Vec<BalanceOutput>,
    transfers: Vec<TransferOutput>,
}

#[derive(serde::Serialize)]
struct BalanceOutput {
    participant: String,
    balance: String,
    status: String,
}

#[derive(serde::Serialize)]
struct TransferOutput {
    from: String,
    to: String,
    amount: String,
}

fn load_group(path: &str) -> (Vec<ParticipantId>, ExpenseLog) {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let file: GroupFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "members": ["alice", "bob", "carol"],
  "expenses": [
    {{ "payer": "alice", "amount": "90" }}
  ]
}}"#
        );
        process::exit(1);
    });

    let members: Vec<ParticipantId> = file.members.iter().map(ParticipantId::new).collect();

    let mut log = ExpenseLog::new();
    for expense in file.expenses {
        let amount: Decimal = expense.amount.parse().unwrap_or_else(|e| {
            eprintln!("Invalid amount '{}': {}", expense.amount, e);
            process::exit(1);
        });
        log.add(Expense::new(ParticipantId::new(&expense.payer), amount));
    }

    (members, log)
}

fn cmd_settle(args: &[String]) {
    let mut input_path = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let (members, expenses) = load_group(&path);
    info!(
        "loaded group: {} members, {} expenses",
        members.len(),
        expenses.len()
    );

    let sheet = BalanceSheet::compute(&members, &expenses).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    let plan = SettlementEngine::settle(&sheet).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    if format == "json" {
        let balances = sheet
            .entries()
            .iter()
            .map(|(participant, balance)| BalanceOutput {
                participant: participant.to_string(),
                balance: balance.to_string(),
                status: if *balance >= split_engine::engine::SETTLED_TOLERANCE {
                    "creditor".to_string()
                } else if *balance <= -split_engine::engine::SETTLED_TOLERANCE {
                    "debtor".to_string()
                } else {
                    "settled".to_string()
                },
            })
            .collect();

        let transfers = plan
            .transfers()
            .iter()
            .map(|t| TransferOutput {
                from: t.from.to_string(),
                to: t.to.to_string(),
                amount: t.amount.to_string(),
            })
            .collect();

        let output = SettleOutput {
            total: plan.total().to_string(),
            equal_share: plan.equal_share().to_string(),
            transfer_count: plan.transfer_count(),
            balances,
            transfers,
        };

        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("{}", sheet);
        println!("{}", plan);
    }
}

fn cmd_generate(args: &[String]) {
    let mut members = 8usize;
    let mut expenses = 24usize;
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--members" => {
                i += 1;
                members = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--members requires a number");
                    process::exit(1);
                });
            }
            "--expenses" => {
                i += 1;
                expenses = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--expenses requires a number");
                    process::exit(1);
                });
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = ScenarioConfig {
        member_count: members,
        expense_count: expenses,
        ..Default::default()
    };

    let group = generate_random_group(&config);

    #[derive(serde::Serialize)]
    struct OutputExpense {
        payer: String,
        amount: String,
    }

    #[derive(serde::Serialize)]
    struct OutputFile {
        members: Vec<String>,
        expenses: Vec<OutputExpense>,
    }

    let output = OutputFile {
        members: group.members().iter().map(|m| m.to_string()).collect(),
        expenses: group
            .expenses()
            .expenses()
            .iter()
            .map(|e| OutputExpense {
                payer: e.payer().to_string(),
                amount: e.amount().to_string(),
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&output).unwrap();

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Generated {} expenses across {} members → {}",
            group.expenses().len(),
            members,
            path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "settle" => cmd_settle(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}

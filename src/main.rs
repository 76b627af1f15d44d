//! risk-engine CLI
//!
//! Run risk scoring, cash-gap analysis, and forward simulation from
//! the command line.
//!
//! # Usage
//!
//! ```bash
//! # DSCR from operating cash flow and debt service
//! risk-engine dscr --operating-cf 200000 --debt-service 120000
//!
//! # Score best/base/worst scenarios from a JSON file
//! risk-engine analyze --input scenarios.json --format json
//!
//! # Cash-gap analysis over an AR/AP ledger
//! risk-engine cashgap --input records.json --as-of 2024-03-15 --months 6
//!
//! # Aging report for one side of the ledger
//! risk-engine aging --input records.json --as-of 2024-03-15 --side ar
//!
//! # Forward simulation
//! risk-engine simulate --input state.json --horizon 12
//!
//! # Generate a random ledger for testing
//! risk-engine generate --records 50 --as-of 2024-03-15
//! ```

use chrono::NaiveDate;
use risk_engine::cashgap::{aging, analyzer};
use risk_engine::core::record::{LedgerRecord, RecordError, RecordSet, RecordSide};
use risk_engine::core::scenario::ScenarioParameters;
use risk_engine::risk::{comparator, dscr};
use risk_engine::simulation::forward::{self, CurrentState};
use risk_engine::simulation::sample_data::{generate_random_ledger, LedgerConfig};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"risk-engine — deterministic financial risk scoring and simulation

USAGE:
    risk-engine <COMMAND> [OPTIONS]

COMMANDS:
    dscr        Compute the debt service coverage ratio and its status
    analyze     Score best/base/worst scenarios and compare them
    cashgap     Analyze receivables vs payables into gaps and a timeline
    aging       Classify AR or AP records into aging buckets
    simulate    Project cash, debt, and net worth forward under a scenario
    generate    Generate a random AR/AP ledger (for testing)
    help        Show this message

OPTIONS (dscr):
    --operating-cf <N>   Operating cash flow
    --debt-service <N>   Total debt service obligation

OPTIONS (analyze, cashgap, aging, simulate):
    --input <FILE>       Path to JSON input file
    --format <FORMAT>    Output format: text (default) or json

OPTIONS (cashgap, aging):
    --as-of <DATE>       Reference date, YYYY-MM-DD (required)
    --months <N>         Timeline length in months (cashgap, default: 6)
    --side <ar|ap>       Ledger side to report (aging, required)
    --materiality <N>    Materiality threshold (aging, default: 10000)

OPTIONS (simulate):
    --horizon <N>        Projection horizon: 3, 6, or 12 months

OPTIONS (generate):
    --records <N>        Number of records (default: 50)
    --as-of <DATE>       Reference date the due dates spread around
    --output <FILE>      Write to file instead of stdout

EXAMPLES:
    risk-engine dscr --operating-cf 200 --debt-service 100
    risk-engine analyze --input scenarios.json --format json
    risk-engine cashgap --input records.json --as-of 2024-03-15
    risk-engine aging --input records.json --as-of 2024-03-15 --side ap
    risk-engine simulate --input state.json --horizon 6
    risk-engine generate --records 80 --as-of 2024-03-15 --output ledger.json"#
    );
}

/// JSON schema for input AR/AP records. Amounts travel as decimal
/// strings; the due date is optional here so a missing one surfaces
/// as a validation error instead of a parse failure.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordInput {
    counterparty: String,
    amount: String,
    invoice_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    side: RecordSide,
    #[serde(default)]
    settled: bool,
}

#[derive(serde::Deserialize)]
struct RecordsFile {
    records: Vec<RecordInput>,
}

/// JSON schema for simulation input.
#[derive(serde::Deserialize)]
struct SimulationFile {
    state: CurrentState,
    scenario: ScenarioParameters,
}

fn read_file(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    })
}

fn load_records(path: &str) -> RecordSet {
    let file: RecordsFile = serde_json::from_str(&read_file(path)).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "records": [
    {{ "counterparty": "ACME-SUPPLY", "amount": "12500.00",
      "invoiceDate": "2024-02-01", "dueDate": "2024-03-01",
      "side": "receivable", "settled": false }}
  ]
}}"#
        );
        process::exit(1);
    });

    let mut set = RecordSet::new();
    for input in file.records {
        let due_date = input.due_date.unwrap_or_else(|| {
            let err = RecordError::MissingDueDate {
                reference: input.counterparty.clone(),
            };
            eprintln!("Invalid record: {}", err);
            process::exit(1);
        });
        let invoice_date = input.invoice_date.unwrap_or(due_date);
        let amount: Decimal = input.amount.parse().unwrap_or_else(|e| {
            eprintln!("Invalid amount '{}': {}", input.amount, e);
            process::exit(1);
        });
        let mut record =
            LedgerRecord::new(input.counterparty, amount, invoice_date, due_date, input.side);
        if input.settled {
            record = record.settle();
        }
        set.add(record);
    }
    set
}

/// Parse `--flag value` pairs, rejecting unknown flags.
fn parse_flags(args: &[String], allowed: &[&str]) -> HashMap<String, String> {
    let mut flags = HashMap::new();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        if !allowed.contains(&flag) {
            eprintln!("Unknown option: {}", flag);
            process::exit(1);
        }
        i += 1;
        let value = args.get(i).cloned().unwrap_or_else(|| {
            eprintln!("{} requires a value", flag);
            process::exit(1);
        });
        flags.insert(flag.to_string(), value);
        i += 1;
    }
    flags
}

fn require<'a>(flags: &'a HashMap<String, String>, flag: &str) -> &'a str {
    flags.get(flag).map(String::as_str).unwrap_or_else(|| {
        eprintln!("Error: {} <VALUE> is required", flag);
        process::exit(1);
    })
}

fn parse_date(value: &str, flag: &str) -> NaiveDate {
    value.parse().unwrap_or_else(|e| {
        eprintln!("{} expects YYYY-MM-DD, got '{}': {}", flag, value, e);
        process::exit(1);
    })
}

fn parse_decimal(value: &str, flag: &str) -> Decimal {
    value.parse().unwrap_or_else(|e| {
        eprintln!("{} expects a decimal number, got '{}': {}", flag, value, e);
        process::exit(1);
    })
}

fn json_output(flags: &HashMap<String, String>) -> bool {
    flags.get("--format").map(String::as_str) == Some("json")
}

fn cmd_dscr(args: &[String]) {
    let flags = parse_flags(args, &["--operating-cf", "--debt-service", "--format"]);
    let operating_cf = parse_decimal(require(&flags, "--operating-cf"), "--operating-cf");
    let debt_service = parse_decimal(require(&flags, "--debt-service"), "--debt-service");

    let result = dscr::evaluate(operating_cf, debt_service);

    if json_output(&flags) {
        println!("{}", serde_json::to_string_pretty(&result).unwrap());
    } else {
        println!("=== DSCR ===");
        if result.dscr.is_infinite() {
            println!("Ratio:  inf (no debt service)");
        } else {
            println!("Ratio:  {:.4}", result.dscr);
        }
        println!("Status: {}", result.status);
    }
}

fn cmd_analyze(args: &[String]) {
    let flags = parse_flags(args, &["--input", "--format"]);
    let path = require(&flags, "--input");

    let set: comparator::ScenarioSet =
        serde_json::from_str(&read_file(path)).unwrap_or_else(|e| {
            eprintln!("Error parsing JSON: {}", e);
            eprintln!("Expected format:");
            eprintln!(
                r#"{{
  "best":  {{ "cash": "120000", "fxDelta": 2,  "rateDelta": 1,  "inflationDelta": 1, "liquidityGap": 0 }},
  "base":  {{ "cash": "100000", "fxDelta": 10, "rateDelta": 5,  "inflationDelta": 2, "liquidityGap": 3 }},
  "worst": {{ "cash": "60000",  "fxDelta": 25, "rateDelta": 10, "inflationDelta": 8, "liquidityGap": 12 }}
}}"#
            );
            process::exit(1);
        });

    let comparison = comparator::compare(&set).unwrap_or_else(|e| {
        eprintln!("Invalid scenario input: {}", e);
        process::exit(1);
    });

    if json_output(&flags) {
        println!("{}", serde_json::to_string_pretty(&comparison).unwrap());
    } else {
        println!("=== Scenario Comparison ===");
        println!(
            "Best:  score {:>6.1}  cash {}",
            comparison.best.score, comparison.best.cash
        );
        println!(
            "Base:  score {:>6.1}  cash {}",
            comparison.base.score, comparison.base.cash
        );
        println!(
            "Worst: score {:>6.1}  cash {}",
            comparison.worst.score, comparison.worst.cash
        );
        println!(
            "\nRisk level: {} — {}",
            comparison.risk_level.level, comparison.risk_level.description
        );
        println!("\nRecommendations:");
        for (i, rec) in comparison.recommendations.iter().enumerate() {
            println!("  {}. {}", i + 1, rec);
        }
    }
}

fn cmd_cashgap(args: &[String]) {
    let flags = parse_flags(args, &["--input", "--as-of", "--months", "--format"]);
    let set = load_records(require(&flags, "--input"));
    let as_of = parse_date(require(&flags, "--as-of"), "--as-of");
    let months: usize = flags
        .get("--months")
        .map(|v| {
            v.parse().unwrap_or_else(|_| {
                eprintln!("--months requires a positive number");
                process::exit(1);
            })
        })
        .unwrap_or(analyzer::DEFAULT_TIMELINE_MONTHS);

    let analysis = analyzer::analyze(&set, as_of, months);

    if json_output(&flags) {
        println!("{}", serde_json::to_string_pretty(&analysis).unwrap());
    } else {
        println!("=== Cash Gap Analysis (as of {}) ===", as_of);
        println!("Total AR:       {}", analysis.total_ar);
        println!("Total AP:       {}", analysis.total_ap);
        println!("Cash gap:       {}", analysis.cash_gap);
        println!("Net gap 30d:    {}", analysis.net_gap_30_days);
        println!("Net gap 60d:    {}", analysis.net_gap_60_days);
        println!("Risk level:     {}", analysis.risk_level);

        println!("\nTimeline:");
        for period in &analysis.timeline {
            println!(
                "  {}  AR {:>14}  AP {:>14}  net {:>14}  cumulative {:>14}",
                period.period,
                period.ar_amount,
                period.ap_amount,
                period.net_cash_flow,
                period.cumulative_cash
            );
        }

        if !analysis.recommendations.is_empty() {
            println!("\nRecommendations:");
            for (i, rec) in analysis.recommendations.iter().enumerate() {
                println!("  {}. {}", i + 1, rec);
            }
        }
    }
}

fn cmd_aging(args: &[String]) {
    let flags = parse_flags(
        args,
        &["--input", "--as-of", "--side", "--materiality", "--format"],
    );
    let set = load_records(require(&flags, "--input"));
    let as_of = parse_date(require(&flags, "--as-of"), "--as-of");
    let side = match require(&flags, "--side") {
        "ar" => RecordSide::Receivable,
        "ap" => RecordSide::Payable,
        other => {
            eprintln!("--side must be 'ar' or 'ap', got '{}'", other);
            process::exit(1);
        }
    };
    let materiality = flags
        .get("--materiality")
        .map(|v| parse_decimal(v, "--materiality"))
        .unwrap_or_else(|| Decimal::from(10_000));

    let report = aging::classify_side(&set, side, as_of, materiality).unwrap_or_else(|e| {
        eprintln!("Aging classification failed: {}", e);
        process::exit(1);
    });

    if json_output(&flags) {
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
    } else {
        println!("=== Aging Report (as of {}) ===", as_of);
        for record in &report {
            println!(
                "  {:<20} {:>14}  due {}  {:>5}d  [{:>5}]  {} / {}",
                record.counterparty,
                record.current_amount,
                record.due_date,
                record.aging_days,
                record.aging_bucket,
                record.status,
                record.risk_level
            );
        }
        println!("\nRecords: {}", report.len());
    }
}

fn cmd_simulate(args: &[String]) {
    let flags = parse_flags(args, &["--input", "--horizon", "--format"]);
    let path = require(&flags, "--input");
    let horizon: u32 = require(&flags, "--horizon").parse().unwrap_or_else(|_| {
        eprintln!("--horizon must be 3, 6, or 12");
        process::exit(1);
    });

    let input: SimulationFile = serde_json::from_str(&read_file(path)).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "state": {{ "cash": "50000", "foreignCash": "10000", "debt": "30000", "netWorth": "20000" }},
  "scenario": {{ "fxDelta": 10, "rateDelta": 5, "inflationDelta": 2, "liquidityGap": 3 }}
}}"#
        );
        process::exit(1);
    });

    let result = forward::run(&input.state, &input.scenario, horizon).unwrap_or_else(|e| {
        eprintln!("Simulation rejected: {}", e);
        process::exit(1);
    });

    if json_output(&flags) {
        println!("{}", serde_json::to_string_pretty(&result).unwrap());
    } else {
        println!("=== Forward Simulation ({} months) ===", horizon);
        for p in &result.projections {
            println!(
                "  month {:>2}  cash {:>14}  debt {:>14}  net worth {:>14}",
                p.month, p.cash, p.debt, p.net_worth
            );
        }
        println!("\nTotal cash change:      {}", result.summary.total_cash_change);
        println!("Total debt change:      {}", result.summary.total_debt_change);
        println!(
            "Total net worth change: {}",
            result.summary.total_net_worth_change
        );
        match result.summary.cash_deficit_month {
            Some(month) => println!("First cash deficit:     month {}", month),
            None => println!("First cash deficit:     none within horizon"),
        }
    }
}

fn cmd_generate(args: &[String]) {
    let flags = parse_flags(args, &["--records", "--as-of", "--output"]);
    let record_count: usize = flags
        .get("--records")
        .map(|v| {
            v.parse().unwrap_or_else(|_| {
                eprintln!("--records requires a number");
                process::exit(1);
            })
        })
        .unwrap_or(50);
    let config = LedgerConfig {
        record_count,
        as_of: flags
            .get("--as-of")
            .map(|v| parse_date(v, "--as-of"))
            .unwrap_or(LedgerConfig::default().as_of),
        ..Default::default()
    };

    let set = generate_random_ledger(&config);

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct OutputRecord {
        counterparty: String,
        amount: String,
        invoice_date: NaiveDate,
        due_date: NaiveDate,
        side: RecordSide,
        settled: bool,
    }

    #[derive(serde::Serialize)]
    struct OutputFile {
        records: Vec<OutputRecord>,
    }

    let output = OutputFile {
        records: set
            .records()
            .iter()
            .map(|r| OutputRecord {
                counterparty: r.counterparty().to_string(),
                amount: r.amount().to_string(),
                invoice_date: r.invoice_date(),
                due_date: r.due_date(),
                side: r.side(),
                settled: r.is_settled(),
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&output).unwrap();

    if let Some(path) = flags.get("--output") {
        fs::write(path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Generated {} records around {} → {}",
            set.len(),
            config.as_of,
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
    log::debug!("dispatching command '{}'", command);

    match command {
        "dscr" => cmd_dscr(rest),
        "analyze" => cmd_analyze(rest),
        "cashgap" => cmd_cashgap(rest),
        "aging" => cmd_aging(rest),
        "simulate" => cmd_simulate(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}

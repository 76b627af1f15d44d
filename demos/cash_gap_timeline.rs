//! Cash-gap timeline and forward simulation example.
//!
//! Builds a small AR/AP book, analyzes the near-term gaps and the
//! six-month timeline, then projects the same snapshot forward under
//! a stress scenario.

use chrono::NaiveDate;
use risk_engine::cashgap::analyzer;
use risk_engine::core::record::{LedgerRecord, RecordSet, RecordSide};
use risk_engine::core::scenario::ScenarioParameters;
use risk_engine::simulation::forward::{self, CurrentState};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  risk-engine: Cash Gap Timeline Example  ║");
    println!("╚══════════════════════════════════════════╝\n");

    let as_of = date(2024, 3, 15);

    let mut book = RecordSet::new();
    book.add(LedgerRecord::new(
        "ACME-SUPPLY", dec!(50_000), date(2024, 2, 20), date(2024, 4, 1), RecordSide::Receivable,
    ));
    book.add(LedgerRecord::new(
        "GLOBEX-LOGISTICS", dec!(25_000), date(2024, 3, 1), date(2024, 5, 10), RecordSide::Receivable,
    ));
    book.add(LedgerRecord::new(
        "STARK-MATERIALS", dec!(70_000), date(2024, 2, 1), date(2024, 4, 10), RecordSide::Payable,
    ));
    book.add(LedgerRecord::new(
        "WAYNE-FREIGHT", dec!(8_000), date(2023, 11, 1), date(2023, 12, 1), RecordSide::Payable,
    ));

    let analysis = analyzer::analyze(&book, as_of, 6);

    println!("━━━ Cash Gap (as of {}) ━━━\n", as_of);
    println!("Total AR:    {}", analysis.total_ar);
    println!("Total AP:    {}", analysis.total_ap);
    println!("Cash gap:    {}", analysis.cash_gap);
    println!("Net gap 30d: {}", analysis.net_gap_30_days);
    println!("Net gap 60d: {}", analysis.net_gap_60_days);
    println!("Risk level:  {}\n", analysis.risk_level);

    println!("Timeline:");
    for period in &analysis.timeline {
        println!(
            "  {}  net {:>10}  cumulative {:>10}",
            period.period, period.net_cash_flow, period.cumulative_cash
        );
    }

    if !analysis.recommendations.is_empty() {
        println!("\nRecommendations:");
        for (i, rec) in analysis.recommendations.iter().enumerate() {
            println!("  {}. {}", i + 1, rec);
        }
    }

    // --- Forward simulation from the same snapshot ---
    println!("\n━━━ Forward Simulation (12 months) ━━━\n");

    let state = CurrentState {
        cash: dec!(30_000),
        foreign_cash: dec!(5_000),
        debt: dec!(120_000),
        net_worth: dec!(60_000),
    };
    let result = forward::run(&state, &ScenarioParameters::new(10.0, 5.0, 2.0, 3.0), 12)
        .expect("valid simulation input");

    for p in &result.projections {
        println!(
            "  month {:>2}  cash {:>10}  debt {:>10}  net worth {:>10}",
            p.month, p.cash, p.debt, p.net_worth
        );
    }
    match result.summary.cash_deficit_month {
        Some(month) => println!("\nFirst cash deficit: month {}", month),
        None => println!("\nNo cash deficit within the horizon"),
    }
}

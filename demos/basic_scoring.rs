//! Basic DSCR and scenario scoring example.
//!
//! Demonstrates how the engine turns raw financial facts into a
//! coverage status and a best/base/worst risk comparison.

use risk_engine::core::scenario::ScenarioParameters;
use risk_engine::risk::comparator::{self, ScenarioInput, ScenarioSet};
use risk_engine::risk::dscr;
use rust_decimal_macros::dec;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  risk-engine: Basic Scoring Example      ║");
    println!("╚══════════════════════════════════════════╝\n");

    // --- Scenario 1: DSCR ---
    println!("━━━ Scenario 1: Debt Service Coverage ━━━\n");

    for (cf, service) in [(dec!(200_000), dec!(100_000)),
                          (dec!(120_000), dec!(120_000)),
                          (dec!(80_000), dec!(100_000)),
                          (dec!(50_000), dec!(0))] {
        let result = dscr::evaluate(cf, service);
        if result.dscr.is_infinite() {
            println!("CF {:>9} / service {:>9}  ->  DSCR inf    [{}]", cf, service, result.status);
        } else {
            println!(
                "CF {:>9} / service {:>9}  ->  DSCR {:.3}  [{}]",
                cf, service, result.dscr, result.status
            );
        }
    }
    println!();

    // --- Scenario 2: best/base/worst comparison ---
    println!("━━━ Scenario 2: Stress Comparison ━━━\n");

    let comparison = comparator::compare(&ScenarioSet {
        best: ScenarioInput::new(dec!(120_000), ScenarioParameters::new(2.0, 1.0, 1.0, 0.0)),
        base: ScenarioInput::new(dec!(100_000), ScenarioParameters::new(10.0, 5.0, 2.0, 3.0)),
        worst: ScenarioInput::new(dec!(60_000), ScenarioParameters::new(25.0, 10.0, 8.0, 12.0)),
    })
    .expect("valid scenario inputs");

    println!("Best:   score {:>5.1}   cash {}", comparison.best.score, comparison.best.cash);
    println!("Base:   score {:>5.1}   cash {}", comparison.base.score, comparison.base.cash);
    println!("Worst:  score {:>5.1}   cash {}", comparison.worst.score, comparison.worst.cash);
    println!(
        "\nRisk level: {} — {}",
        comparison.risk_level.level, comparison.risk_level.description
    );
    println!("\nRecommendations:");
    for (i, rec) in comparison.recommendations.iter().enumerate() {
        println!("  {}. {}", i + 1, rec);
    }
}

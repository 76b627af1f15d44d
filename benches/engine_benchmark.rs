use criterion::{black_box, criterion_group, criterion_main, Criterion};
use risk_engine::cashgap::analyzer;
use risk_engine::core::scenario::ScenarioParameters;
use risk_engine::risk::comparator::{self, ScenarioInput, ScenarioSet};
use risk_engine::simulation::forward::{self, CurrentState};
use risk_engine::simulation::sample_data::{generate_random_ledger, LedgerConfig};
use rust_decimal_macros::dec;

fn bench_cashgap_100_records(c: &mut Criterion) {
    let config = LedgerConfig {
        record_count: 100,
        ..Default::default()
    };
    let set = generate_random_ledger(&config);

    c.bench_function("cashgap_100_records", |b| {
        b.iter(|| analyzer::analyze(black_box(&set), config.as_of, 6))
    });
}

fn bench_cashgap_10000_records(c: &mut Criterion) {
    let config = LedgerConfig {
        record_count: 10_000,
        ..Default::default()
    };
    let set = generate_random_ledger(&config);

    c.bench_function("cashgap_10000_records", |b| {
        b.iter(|| analyzer::analyze(black_box(&set), config.as_of, 12))
    });
}

fn bench_scenario_comparison(c: &mut Criterion) {
    let set = ScenarioSet {
        best: ScenarioInput::new(dec!(120_000), ScenarioParameters::new(2.0, 1.0, 1.0, 0.0)),
        base: ScenarioInput::new(dec!(100_000), ScenarioParameters::new(10.0, 5.0, 2.0, 3.0)),
        worst: ScenarioInput::new(dec!(60_000), ScenarioParameters::new(25.0, 10.0, 8.0, 12.0)),
    };

    c.bench_function("scenario_comparison", |b| {
        b.iter(|| comparator::compare(black_box(&set)))
    });
}

fn bench_simulation_12_months(c: &mut Criterion) {
    let state = CurrentState {
        cash: dec!(150_000),
        foreign_cash: dec!(30_000),
        debt: dec!(400_000),
        net_worth: dec!(250_000),
    };
    let params = ScenarioParameters::new(10.0, 5.0, 2.0, 3.0);

    c.bench_function("simulation_12_months", |b| {
        b.iter(|| forward::run(black_box(&state), black_box(&params), 12))
    });
}

criterion_group!(
    benches,
    bench_cashgap_100_records,
    bench_cashgap_10000_records,
    bench_scenario_comparison,
    bench_simulation_12_months
);
criterion_main!(benches);

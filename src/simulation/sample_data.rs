//! Random AR/AP ledger generation for benches and the CLI.
//!
//! Produces record populations with due dates spread around a
//! reference date, for exercising the cash-gap and aging analyzers
//! on realistically sized books.

use crate::core::record::{LedgerRecord, RecordSet, RecordSide};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;

const COUNTERPARTIES: [&str; 8] = [
    "ACME-SUPPLY",
    "GLOBEX-LOGISTICS",
    "INITECH-SERVICES",
    "UMBRELLA-PARTS",
    "STARK-MATERIALS",
    "WAYNE-FREIGHT",
    "TYRELL-CONSULTING",
    "CYBERDYNE-LEASING",
];

/// Configuration for generating a random AR/AP ledger.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Number of records to generate.
    pub record_count: usize,
    /// Reference date the due dates are spread around.
    pub as_of: NaiveDate,
    /// Furthest a due date may sit before `as_of` (overdue) in days.
    pub max_days_overdue: i64,
    /// Furthest a due date may sit after `as_of` in days.
    pub max_days_ahead: i64,
    /// Minimum record amount.
    pub min_amount: Decimal,
    /// Maximum record amount.
    pub max_amount: Decimal,
    /// Share of records that are receivables (0.0–1.0).
    pub receivable_share: f64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            record_count: 50,
            as_of: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            max_days_overdue: 120,
            max_days_ahead: 180,
            min_amount: Decimal::from(500),
            max_amount: Decimal::from(250_000),
            receivable_share: 0.5,
        }
    }
}

/// Generate a random ledger for testing.
pub fn generate_random_ledger(config: &LedgerConfig) -> RecordSet {
    let mut rng = rand::thread_rng();
    let mut set = RecordSet::new();

    let min_f64: f64 = config.min_amount.to_string().parse().unwrap_or(500.0);
    let max_f64: f64 = config.max_amount.to_string().parse().unwrap_or(250_000.0);

    for _ in 0..config.record_count {
        let side = if rng.gen_bool(config.receivable_share.clamp(0.0, 1.0)) {
            RecordSide::Receivable
        } else {
            RecordSide::Payable
        };

        let offset = rng.gen_range(-config.max_days_overdue..=config.max_days_ahead);
        let due_date = config.as_of + Duration::days(offset);
        let invoice_date = due_date - Duration::days(rng.gen_range(15..=60));

        let amount_f64 = rng.gen_range(min_f64..max_f64);
        let amount = Decimal::from_f64_retain(amount_f64)
            .unwrap_or(Decimal::from(500))
            .round_dp(2);

        if amount > Decimal::ZERO {
            let counterparty = COUNTERPARTIES[rng.gen_range(0..COUNTERPARTIES.len())];
            set.add(LedgerRecord::new(
                counterparty,
                amount,
                invoice_date,
                due_date,
                side,
            ));
        }
    }

    set
}

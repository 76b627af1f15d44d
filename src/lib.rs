//! # risk-engine
//!
//! Deterministic financial risk scoring, cash-gap analysis, and forward
//! simulation engine.
//!
//! Given raw financial facts (balances, debt service, receivables and
//! payables, scenario deltas), this engine produces risk scores, scenario
//! comparisons, cash-gap timelines, and multi-month projections. Every
//! component is a pure function of its inputs: identical arguments,
//! including the caller-supplied reference date, always yield identical
//! output, so independently rendered views of the same data can never
//! disagree.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: scenario parameters, AR/AP records, risk tiers
//! - **risk** — DSCR evaluation, weighted factor scoring, scenario comparison
//! - **cashgap** — Receivable/payable gap analysis and aging classification
//! - **simulation** — Forward monthly projection and sample-data generation

pub mod cashgap;
pub mod core;
pub mod risk;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::cashgap::aging::{AgingBucket, AgingRecord, AgingStatus};
    pub use crate::cashgap::analyzer::{CashGapAnalysis, TimelinePeriod};
    pub use crate::core::record::{LedgerRecord, RecordSet, RecordSide};
    pub use crate::core::scenario::ScenarioParameters;
    pub use crate::core::tier::{DscrStatus, RiskTier};
    pub use crate::risk::comparator::{ScenarioComparison, ScenarioInput, ScenarioSet};
    pub use crate::risk::dscr::DscrResult;
    pub use crate::risk::factors::{RiskFactors, RiskScenario};
    pub use crate::simulation::forward::{CurrentState, SimulationResult};
}

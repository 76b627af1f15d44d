//! Foundational types: scenario parameters, AR/AP records, risk tiers.

pub mod record;
pub mod scenario;
pub mod tier;

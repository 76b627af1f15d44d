//! Receivable/payable reconciliation: cash-gap analysis and aging.

pub mod aging;
pub mod analyzer;

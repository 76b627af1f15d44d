//! Risk scoring: DSCR evaluation, weighted factor model, scenario comparison.

pub mod comparator;
pub mod dscr;
pub mod factors;

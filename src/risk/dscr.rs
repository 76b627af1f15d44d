//! Debt Service Coverage Ratio evaluation.
//!
//! DSCR = operating cash flow / total debt service. Zero debt service
//! is a defined state, not an error: the ratio is `+∞` and the status
//! is `ok` (no debt to cover means minimal coverage risk).

use crate::core::tier::DscrStatus;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Result of a DSCR evaluation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DscrResult {
    /// The coverage ratio. `+∞` when there is no debt service.
    #[serde(serialize_with = "serialize_ratio")]
    pub dscr: f64,
    pub status: DscrStatus,
}

/// JSON has no infinity literal, so `+∞` crosses the boundary as "inf".
fn serialize_ratio<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_infinite() {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Compute the debt service coverage ratio.
///
/// Division is performed in `Decimal` and converted to `f64` for the
/// ratio output, so identical inputs always produce identical results.
pub fn calculate_dscr(operating_cf: Decimal, debt_service: Decimal) -> f64 {
    if debt_service == Decimal::ZERO {
        return f64::INFINITY;
    }
    let ratio = operating_cf / debt_service;
    ratio.to_string().parse::<f64>().unwrap_or(0.0)
}

/// Compute the ratio and its three-band status in one step.
pub fn evaluate(operating_cf: Decimal, debt_service: Decimal) -> DscrResult {
    let dscr = calculate_dscr(operating_cf, debt_service);
    DscrResult {
        dscr,
        status: DscrStatus::from_ratio(dscr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_healthy_coverage() {
        let result = evaluate(dec!(200), dec!(100));
        assert_relative_eq!(result.dscr, 2.0);
        assert_eq!(result.status, DscrStatus::Ok);
    }

    #[test]
    fn test_break_even_is_warning() {
        let result = evaluate(dec!(120), dec!(120));
        assert_relative_eq!(result.dscr, 1.0);
        assert_eq!(result.status, DscrStatus::Warning);
    }

    #[test]
    fn test_under_coverage_is_critical() {
        let result = evaluate(dec!(80), dec!(100));
        assert_relative_eq!(result.dscr, 0.8);
        assert_eq!(result.status, DscrStatus::Critical);
    }

    #[test]
    fn test_zero_debt_service_is_infinite_and_ok() {
        let result = evaluate(dec!(500), Decimal::ZERO);
        assert!(result.dscr.is_infinite());
        assert_eq!(result.status, DscrStatus::Ok);

        // Holds for any operating cash flow, including zero and negative.
        assert!(calculate_dscr(Decimal::ZERO, Decimal::ZERO).is_infinite());
        assert!(calculate_dscr(dec!(-100), Decimal::ZERO).is_infinite());
    }

    #[test]
    fn test_negative_cash_flow() {
        let result = evaluate(dec!(-50), dec!(100));
        assert_relative_eq!(result.dscr, -0.5);
        assert_eq!(result.status, DscrStatus::Critical);
    }

    #[test]
    fn test_infinity_serializes_as_string() {
        let result = evaluate(dec!(500), Decimal::ZERO);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"inf\""));
        assert!(json.contains("\"ok\""));
    }
}

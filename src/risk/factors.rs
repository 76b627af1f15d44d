//! Weighted risk factor scoring.
//!
//! Converts scenario deltas into non-negative impact scores via fixed
//! sensitivity weights and aggregates them into a 0–100 risk score.
//! The weights live here as named constants so every widget scores a
//! scenario identically; tune them in one place only.

use crate::core::scenario::{ScenarioError, ScenarioParameters};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// FX moves hit hardest: cross-currency exposure compounds quickly.
pub const FX_WEIGHT: f64 = 2.0;
/// Rate moves feed through debt service gradually.
pub const RATE_WEIGHT: f64 = 1.0;
/// Inflation erodes purchasing power faster than rates bite.
pub const INFLATION_WEIGHT: f64 = 1.5;
/// Liquidity gaps are as dangerous as FX exposure.
pub const LIQUIDITY_WEIGHT: f64 = 2.0;

/// The ceiling of the risk score scale.
pub const MAX_SCORE: f64 = 100.0;

/// The four factor labels, in the fixed order used for deterministic
/// tie-breaking in recommendations.
pub const FACTOR_ORDER: [&str; 4] = ["fx", "rate", "inflation", "liquidity"];

/// Per-factor weighted impact scores.
///
/// FX, rate, and inflation impacts are magnitudes (the absolute delta
/// times its weight). The liquidity impact keeps its sign: a negative
/// liquidity gap is a surplus and lowers the total impact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub fx_impact: f64,
    pub rate_impact: f64,
    pub inflation_impact: f64,
    pub liquidity_impact: f64,
}

impl RiskFactors {
    /// Derive weighted impacts from scenario deltas.
    ///
    /// Validation happens before any arithmetic: a non-finite delta
    /// rejects the whole scenario, never a partial result.
    pub fn from_parameters(params: &ScenarioParameters) -> Result<Self, ScenarioError> {
        params.validate()?;
        Ok(Self {
            fx_impact: params.fx_delta.abs() * FX_WEIGHT,
            rate_impact: params.rate_delta.abs() * RATE_WEIGHT,
            inflation_impact: params.inflation_delta.abs() * INFLATION_WEIGHT,
            liquidity_impact: params.liquidity_gap * LIQUIDITY_WEIGHT,
        })
    }

    /// Sum of all four impacts.
    pub fn total_impact(&self) -> f64 {
        self.fx_impact + self.rate_impact + self.inflation_impact + self.liquidity_impact
    }

    /// Impacts labeled in the fixed factor order.
    pub fn labeled(&self) -> [(&'static str, f64); 4] {
        [
            ("fx", self.fx_impact),
            ("rate", self.rate_impact),
            ("inflation", self.inflation_impact),
            ("liquidity", self.liquidity_impact),
        ]
    }

    /// The largest contributor. Ties resolve to the earlier factor in
    /// [`FACTOR_ORDER`], keeping recommendation output stable.
    pub fn dominant_factor(&self) -> (&'static str, f64) {
        let mut best = ("fx", self.fx_impact);
        for (label, impact) in self.labeled() {
            if impact > best.1 {
                best = (label, impact);
            }
        }
        best
    }
}

/// Aggregate a factor set into a 0–100 score. 100 means no impact.
pub fn risk_score(factors: &RiskFactors) -> f64 {
    (MAX_SCORE - factors.total_impact()).clamp(0.0, MAX_SCORE)
}

/// One evaluated scenario: the cash position under it, its score,
/// and the factor breakdown behind the score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScenario {
    pub cash: Decimal,
    pub score: f64,
    pub factors: RiskFactors,
}

impl RiskScenario {
    /// Score a scenario. `cash` is supplied by the caller (typically a
    /// snapshot or a simulator projection); it is reported, not derived.
    pub fn evaluate(cash: Decimal, params: &ScenarioParameters) -> Result<Self, ScenarioError> {
        let factors = RiskFactors::from_parameters(params)?;
        Ok(Self {
            cash,
            score: risk_score(&factors),
            factors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reference_scenario() {
        // fx=10, rate=5, inflation=2, liquidity=3 -> impacts 20/5/3/6, score 66
        let params = ScenarioParameters::new(10.0, 5.0, 2.0, 3.0);
        let factors = RiskFactors::from_parameters(&params).unwrap();
        assert_relative_eq!(factors.fx_impact, 20.0);
        assert_relative_eq!(factors.rate_impact, 5.0);
        assert_relative_eq!(factors.inflation_impact, 3.0);
        assert_relative_eq!(factors.liquidity_impact, 6.0);
        assert_relative_eq!(factors.total_impact(), 34.0);
        assert_relative_eq!(risk_score(&factors), 66.0);
    }

    #[test]
    fn test_negative_deltas_use_magnitude() {
        let params = ScenarioParameters::new(-10.0, -5.0, -2.0, 0.0);
        let factors = RiskFactors::from_parameters(&params).unwrap();
        assert_relative_eq!(factors.fx_impact, 20.0);
        assert_relative_eq!(factors.rate_impact, 5.0);
        assert_relative_eq!(factors.inflation_impact, 3.0);
    }

    #[test]
    fn test_negative_liquidity_gap_keeps_sign() {
        let params = ScenarioParameters::new(0.0, 0.0, 0.0, -4.0);
        let factors = RiskFactors::from_parameters(&params).unwrap();
        assert_relative_eq!(factors.liquidity_impact, -8.0);
        // A surplus pushes the score above what impacts alone allow,
        // but never past the ceiling.
        assert_relative_eq!(risk_score(&factors), 100.0);
    }

    #[test]
    fn test_score_clamps_to_zero() {
        let params = ScenarioParameters::new(40.0, 20.0, 10.0, 10.0);
        let scenario = RiskScenario::evaluate(dec!(1000), &params).unwrap();
        assert_relative_eq!(scenario.score, 0.0);
    }

    #[test]
    fn test_perfect_score_iff_zero_impact() {
        let neutral = RiskFactors::from_parameters(&ScenarioParameters::neutral()).unwrap();
        assert_relative_eq!(risk_score(&neutral), 100.0);

        let params = ScenarioParameters::new(0.1, 0.0, 0.0, 0.0);
        let factors = RiskFactors::from_parameters(&params).unwrap();
        assert!(risk_score(&factors) < 100.0);
    }

    #[test]
    fn test_dominant_factor_tie_break() {
        // fx and liquidity tie at 20; fx wins by fixed order.
        let params = ScenarioParameters::new(10.0, 0.0, 0.0, 10.0);
        let factors = RiskFactors::from_parameters(&params).unwrap();
        assert_eq!(factors.dominant_factor().0, "fx");
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let params = ScenarioParameters::new(f64::NAN, 0.0, 0.0, 0.0);
        assert!(RiskFactors::from_parameters(&params).is_err());
    }
}

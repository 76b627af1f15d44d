//! Forward projection of cash, debt, and net worth under a scenario.
//!
//! A closed-form monthly recurrence: each month applies the scenario
//! deltas as constant monthly rates to the previous month's state.
//! O(1) per month, O(horizon) total, and all arithmetic in `Decimal`
//! rounded to cents so repeated runs are byte-identical.

use crate::core::scenario::{pct_to_fraction, ScenarioError, ScenarioParameters};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The permitted projection horizons, in months.
pub const ALLOWED_HORIZONS: [u32; 3] = [3, 6, 12];

/// Errors arising from simulation input validation.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("horizon must be one of 3, 6, or 12 months, got {months}")]
    InvalidHorizon { months: u32 },
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}

/// The financial state the projection starts from.
///
/// `foreign_cash` is the foreign-currency-denominated slice of the
/// cash position; it is the only balance the FX delta translates.
/// Reported cash is always domestic plus foreign.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentState {
    pub cash: Decimal,
    #[serde(default)]
    pub foreign_cash: Decimal,
    pub debt: Decimal,
    pub net_worth: Decimal,
}

/// One projected month of state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthProjection {
    /// 1-based month index.
    pub month: u32,
    pub cash: Decimal,
    pub debt: Decimal,
    pub net_worth: Decimal,
}

/// Net changes over the whole horizon and the first insolvent month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    /// First month whose projected cash is negative, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_deficit_month: Option<u32>,
    pub total_cash_change: Decimal,
    pub total_debt_change: Decimal,
    pub total_net_worth_change: Decimal,
}

/// Scenario parameters echoed back with the horizon they ran over.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParameters {
    #[serde(flatten)]
    pub scenario: ScenarioParameters,
    pub horizon_months: u32,
}

/// Full result of a forward simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub parameters: SimulationParameters,
    pub current_state: CurrentState,
    pub projections: Vec<MonthProjection>,
    pub summary: SimulationSummary,
}

/// Project the state forward `horizon_months` months under the scenario.
///
/// Per month: debt accrues interest at `rate_delta` percent, domestic
/// cash erodes at `inflation_delta` percent, foreign cash additionally
/// translates at `fx_delta` percent, and net worth moves by the cash
/// and debt changes (non-modeled assets held constant).
pub fn run(
    state: &CurrentState,
    params: &ScenarioParameters,
    horizon_months: u32,
) -> Result<SimulationResult, SimulationError> {
    if !ALLOWED_HORIZONS.contains(&horizon_months) {
        return Err(SimulationError::InvalidHorizon {
            months: horizon_months,
        });
    }
    params.validate().map_err(SimulationError::from)?;

    let one = Decimal::ONE;
    let rate = one + pct_to_fraction("rateDelta", params.rate_delta)?;
    let erosion = one - pct_to_fraction("inflationDelta", params.inflation_delta)?;
    let fx = one + pct_to_fraction("fxDelta", params.fx_delta)?;

    let mut domestic = state.cash - state.foreign_cash;
    let mut foreign = state.foreign_cash;
    let mut debt = state.debt;
    let mut net_worth = state.net_worth;
    let mut prev_cash = state.cash;

    let mut projections = Vec::with_capacity(horizon_months as usize);
    let mut cash_deficit_month = None;

    for month in 1..=horizon_months {
        domestic = round2(domestic * erosion);
        foreign = round2(foreign * erosion * fx);
        let new_debt = round2(debt * rate);
        let cash = domestic + foreign;

        net_worth = net_worth + (cash - prev_cash) - (new_debt - debt);
        debt = new_debt;
        prev_cash = cash;

        if cash < Decimal::ZERO && cash_deficit_month.is_none() {
            cash_deficit_month = Some(month);
        }

        projections.push(MonthProjection {
            month,
            cash,
            debt,
            net_worth,
        });
    }

    Ok(SimulationResult {
        parameters: SimulationParameters {
            scenario: *params,
            horizon_months,
        },
        current_state: *state,
        projections,
        summary: SimulationSummary {
            cash_deficit_month,
            total_cash_change: prev_cash - state.cash,
            total_debt_change: debt - state.debt,
            total_net_worth_change: net_worth - state.net_worth,
        },
    })
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn state(cash: Decimal, debt: Decimal) -> CurrentState {
        CurrentState {
            cash,
            foreign_cash: Decimal::ZERO,
            debt,
            net_worth: cash - debt,
        }
    }

    #[test]
    fn test_projection_length_matches_horizon() {
        let s = state(dec!(10_000), dec!(5_000));
        let params = ScenarioParameters::new(1.0, 1.0, 1.0, 0.0);
        for horizon in ALLOWED_HORIZONS {
            let result = run(&s, &params, horizon).unwrap();
            assert_eq!(result.projections.len(), horizon as usize);
            assert_eq!(result.projections.last().unwrap().month, horizon);
        }
    }

    #[test]
    fn test_invalid_horizon_rejected() {
        let s = state(dec!(10_000), dec!(5_000));
        let params = ScenarioParameters::neutral();
        for horizon in [0, 1, 2, 4, 5, 7, 11, 13, 24] {
            assert!(matches!(
                run(&s, &params, horizon),
                Err(SimulationError::InvalidHorizon { .. })
            ));
        }
    }

    #[test]
    fn test_neutral_scenario_is_identity() {
        let s = state(dec!(10_000), dec!(5_000));
        let result = run(&s, &ScenarioParameters::neutral(), 12).unwrap();
        for projection in &result.projections {
            assert_eq!(projection.cash, dec!(10_000));
            assert_eq!(projection.debt, dec!(5_000));
            assert_eq!(projection.net_worth, dec!(5_000));
        }
        assert_eq!(result.summary.total_cash_change, Decimal::ZERO);
        assert!(result.summary.cash_deficit_month.is_none());
    }

    #[test]
    fn test_debt_compounds_monthly() {
        let s = state(dec!(10_000), dec!(1_000));
        let params = ScenarioParameters::new(0.0, 10.0, 0.0, 0.0);
        let result = run(&s, &params, 3).unwrap();
        assert_eq!(result.projections[0].debt, dec!(1_100));
        assert_eq!(result.projections[1].debt, dec!(1_210));
        assert_eq!(result.projections[2].debt, dec!(1_331));
        assert_eq!(result.summary.total_debt_change, dec!(331));
    }

    #[test]
    fn test_inflation_erodes_cash() {
        let s = state(dec!(10_000), Decimal::ZERO);
        let params = ScenarioParameters::new(0.0, 0.0, 5.0, 0.0);
        let result = run(&s, &params, 3).unwrap();
        assert_eq!(result.projections[0].cash, dec!(9_500));
        assert_eq!(result.projections[1].cash, dec!(9_025));
        assert_eq!(result.projections[2].cash, dec!(8_573.75));
    }

    #[test]
    fn test_fx_translates_only_foreign_cash() {
        let s = CurrentState {
            cash: dec!(10_000),
            foreign_cash: dec!(4_000),
            debt: Decimal::ZERO,
            net_worth: dec!(10_000),
        };
        let params = ScenarioParameters::new(-10.0, 0.0, 0.0, 0.0);
        let result = run(&s, &params, 3).unwrap();
        // Domestic 6000 untouched; foreign 4000 loses 10% per month.
        assert_eq!(result.projections[0].cash, dec!(6_000) + dec!(3_600));
        assert_eq!(result.projections[1].cash, dec!(6_000) + dec!(3_240));
    }

    #[test]
    fn test_net_worth_tracks_cash_and_debt() {
        let s = state(dec!(10_000), dec!(2_000));
        let params = ScenarioParameters::new(0.0, 10.0, 5.0, 0.0);
        let result = run(&s, &params, 6).unwrap();
        let mut prev = (s.cash, s.debt, s.net_worth);
        for p in &result.projections {
            let expected = prev.2 + (p.cash - prev.0) - (p.debt - prev.1);
            assert_eq!(p.net_worth, expected);
            prev = (p.cash, p.debt, p.net_worth);
        }
    }

    #[test]
    fn test_deficit_month_is_first_negative() {
        // A foreign-denominated overdraft compounding at +5% per month
        // against a fixed domestic cushion: 55 -> 7.75 -> -41.86.
        let s = CurrentState {
            cash: dec!(100),
            foreign_cash: dec!(-900),
            debt: Decimal::ZERO,
            net_worth: dec!(100),
        };
        let params = ScenarioParameters::new(5.0, 0.0, 0.0, 0.0);
        let result = run(&s, &params, 12).unwrap();
        assert_eq!(result.summary.cash_deficit_month, Some(3));
        for p in &result.projections {
            if p.month < 3 {
                assert!(p.cash >= Decimal::ZERO);
            }
        }
        assert_eq!(result.projections[2].cash, dec!(-41.86));
    }

    #[test]
    fn test_deterministic_repeat_runs() {
        let s = state(dec!(123_456.78), dec!(98_765.43));
        let params = ScenarioParameters::new(3.5, 2.25, 1.75, 0.5);
        let a = run(&s, &params, 12).unwrap();
        let b = run(&s, &params, 12).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_deficit_month_absent_from_json_when_none() {
        let s = state(dec!(10_000), Decimal::ZERO);
        let result = run(&s, &ScenarioParameters::neutral(), 3).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["summary"].get("cashDeficitMonth").is_none());
    }

    #[test]
    fn test_nan_parameter_rejected() {
        let s = state(dec!(1), dec!(1));
        let params = ScenarioParameters::new(0.0, f64::NAN, 0.0, 0.0);
        assert!(run(&s, &params, 6).is_err());
    }
}

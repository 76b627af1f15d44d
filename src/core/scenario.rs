use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising from scenario parameter validation.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario parameter '{field}' must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("scenario parameter '{field}' is out of representable range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Caller-supplied stress deltas, in signed percentage points.
///
/// A `fx_delta` of 10 means a 10% adverse FX move; `liquidity_gap`
/// is conventionally non-negative but a negative value is legal and
/// simply lowers the liquidity impact.
///
/// # Examples
///
/// ```
/// use risk_engine::core::scenario::ScenarioParameters;
///
/// let params = ScenarioParameters::new(10.0, 5.0, 2.0, 3.0);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioParameters {
    pub fx_delta: f64,
    pub rate_delta: f64,
    pub inflation_delta: f64,
    #[serde(default)]
    pub liquidity_gap: f64,
}

impl ScenarioParameters {
    pub fn new(fx_delta: f64, rate_delta: f64, inflation_delta: f64, liquidity_gap: f64) -> Self {
        Self {
            fx_delta,
            rate_delta,
            inflation_delta,
            liquidity_gap,
        }
    }

    /// The all-zero scenario: no stress applied.
    pub fn neutral() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Reject non-finite parameters before any computation starts.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(ScenarioError::NonFinite { field, value });
            }
        }
        Ok(())
    }

    /// Named field iteration, in the fixed factor order used for
    /// deterministic tie-breaking everywhere else in the engine.
    pub fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("fxDelta", self.fx_delta),
            ("rateDelta", self.rate_delta),
            ("inflationDelta", self.inflation_delta),
            ("liquidityGap", self.liquidity_gap),
        ]
    }
}

/// Convert a percentage delta into a `Decimal` monthly growth factor
/// fraction (e.g. 5.0 -> 0.05) for use in the forward simulator.
pub fn pct_to_fraction(field: &'static str, value: f64) -> Result<Decimal, ScenarioError> {
    if !value.is_finite() {
        return Err(ScenarioError::NonFinite { field, value });
    }
    let pct = Decimal::from_f64_retain(value).ok_or(ScenarioError::OutOfRange { field, value })?;
    Ok(pct / Decimal::from(100))
}

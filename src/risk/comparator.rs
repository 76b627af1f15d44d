//! Best/base/worst scenario comparison.
//!
//! Scores three parameter sets with the factor model and assembles a
//! single comparison object with a tier derived from the base scenario
//! and an ordered, deterministic recommendation list.

use crate::core::scenario::{ScenarioError, ScenarioParameters};
use crate::core::tier::RiskTier;
use crate::risk::factors::RiskScenario;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A parameter set paired with the cash position it applies to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInput {
    pub cash: Decimal,
    #[serde(flatten)]
    pub parameters: ScenarioParameters,
}

impl ScenarioInput {
    pub fn new(cash: Decimal, parameters: ScenarioParameters) -> Self {
        Self { cash, parameters }
    }
}

/// The three scenarios to compare. The best/base/worst ordering of
/// cash positions is a caller convention; the comparator scores
/// whatever it is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub best: ScenarioInput,
    pub base: ScenarioInput,
    pub worst: ScenarioInput,
}

/// Tier plus its human description, derived from the base scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskLevel {
    pub level: RiskTier,
    pub description: String,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        let level = RiskTier::from_score(score);
        Self {
            level,
            description: level.description().to_string(),
        }
    }
}

/// Result of comparing best/base/worst scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub best: RiskScenario,
    pub base: RiskScenario,
    pub worst: RiskScenario,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

/// Score all three scenarios and assemble the comparison.
///
/// Every parameter set is validated before any scoring starts; one bad
/// scenario rejects the whole request.
pub fn compare(set: &ScenarioSet) -> Result<ScenarioComparison, ScenarioError> {
    set.best.parameters.validate()?;
    set.base.parameters.validate()?;
    set.worst.parameters.validate()?;

    let best = RiskScenario::evaluate(set.best.cash, &set.best.parameters)?;
    let base = RiskScenario::evaluate(set.base.cash, &set.base.parameters)?;
    let worst = RiskScenario::evaluate(set.worst.cash, &set.worst.parameters)?;

    let risk_level = RiskLevel::from_score(base.score);
    let recommendations = recommendations_for(&base, risk_level.level);

    Ok(ScenarioComparison {
        best,
        base,
        worst,
        risk_level,
        recommendations,
    })
}

/// Build the ordered recommendation list for the base scenario.
///
/// One lead entry keyed to the tier, then one entry per positive-impact
/// factor in descending impact order. Ties resolve to the fixed factor
/// order, so identical inputs always produce the identical list.
fn recommendations_for(base: &RiskScenario, tier: RiskTier) -> Vec<String> {
    let mut recommendations = Vec::new();

    recommendations.push(match tier {
        RiskTier::Low => "Position is resilient; maintain current reserves and review quarterly"
            .to_string(),
        RiskTier::Medium => {
            "Moderate stress exposure; build a contingency buffer for the dominant factors"
                .to_string()
        }
        RiskTier::High => {
            "High stress exposure; reduce the dominant exposures before conditions worsen"
                .to_string()
        }
        RiskTier::Critical => {
            "Critical stress exposure; restructure the position immediately".to_string()
        }
    });

    // Stable sort keeps the fixed factor order on equal impacts.
    let mut factors: Vec<(&'static str, f64)> = base.factors.labeled().to_vec();
    factors.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    for (label, impact) in factors {
        if impact <= 0.0 {
            continue;
        }
        recommendations.push(match label {
            "fx" => format!(
                "Hedge foreign-currency exposure (FX impact {:.1} is driving the score)",
                impact
            ),
            "rate" => format!(
                "Refinance floating-rate debt or extend maturities (rate impact {:.1})",
                impact
            ),
            "inflation" => format!(
                "Index revenues or shorten pricing cycles (inflation impact {:.1})",
                impact
            ),
            "liquidity" => format!(
                "Improve near-term liquidity: accelerate receivables or arrange credit lines (liquidity impact {:.1})",
                impact
            ),
            _ => unreachable!("unknown factor label"),
        });
    }

    recommendations
}

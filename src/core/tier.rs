use serde::{Deserialize, Serialize};
use std::fmt;

/// Score floor for the low-risk tier: scores at or above this are `Low`.
pub const LOW_SCORE_FLOOR: f64 = 80.0;
/// Score floor for the medium-risk tier.
pub const MEDIUM_SCORE_FLOOR: f64 = 60.0;
/// Score floor for the high-risk tier. Anything below is `Critical`.
pub const HIGH_SCORE_FLOOR: f64 = 40.0;

/// DSCR at or above this value is healthy.
pub const DSCR_OK_FLOOR: f64 = 1.5;
/// DSCR at or above this (but below [`DSCR_OK_FLOOR`]) is a warning.
pub const DSCR_WARNING_FLOOR: f64 = 1.0;

/// Four-tier risk classification shared by every component.
///
/// Scores, cash gaps, and aging records all map into this single
/// tier table so that two widgets rendering the same underlying
/// numbers can never disagree about the tier.
///
/// Tiers are ordered by severity: `Low < Medium < High < Critical`.
///
/// # Examples
///
/// ```
/// use risk_engine::core::tier::RiskTier;
///
/// assert_eq!(RiskTier::from_score(80.0), RiskTier::Low);
/// assert_eq!(RiskTier::from_score(79.9), RiskTier::Medium);
/// assert!(RiskTier::Critical > RiskTier::High);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskTier {
    /// Classify a 0–100 risk score. Boundary values belong to the
    /// safer band: exactly 80 is `Low`, exactly 60 is `Medium`.
    pub fn from_score(score: f64) -> Self {
        if score >= LOW_SCORE_FLOOR {
            RiskTier::Low
        } else if score >= MEDIUM_SCORE_FLOOR {
            RiskTier::Medium
        } else if score >= HIGH_SCORE_FLOOR {
            RiskTier::High
        } else {
            RiskTier::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
            RiskTier::Critical => "critical",
        }
    }

    /// One-line human description used in scenario comparisons.
    pub fn description(&self) -> &'static str {
        match self {
            RiskTier::Low => "Financial position is resilient under the modeled scenario",
            RiskTier::Medium => "Moderate exposure; monitor the dominant risk factors",
            RiskTier::High => "Significant exposure; mitigation should begin promptly",
            RiskTier::Critical => "Severe exposure; immediate corrective action required",
        }
    }

    /// The next tier up in severity, saturating at `Critical`.
    pub fn escalate(&self) -> Self {
        match self {
            RiskTier::Low => RiskTier::Medium,
            RiskTier::Medium => RiskTier::High,
            RiskTier::High | RiskTier::Critical => RiskTier::Critical,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Three-band DSCR classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DscrStatus {
    Ok,
    Warning,
    Critical,
}

impl DscrStatus {
    /// Classify a DSCR value. Band edges are inclusive at the lower
    /// edge of the higher band: 1.5 is `Ok`, 1.0 is `Warning`.
    /// `+∞` (no debt service) is always `Ok`.
    pub fn from_ratio(dscr: f64) -> Self {
        if dscr >= DSCR_OK_FLOOR {
            DscrStatus::Ok
        } else if dscr >= DSCR_WARNING_FLOOR {
            DscrStatus::Warning
        } else {
            DscrStatus::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DscrStatus::Ok => "ok",
            DscrStatus::Warning => "warning",
            DscrStatus::Critical => "critical",
        }
    }
}

impl fmt::Display for DscrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

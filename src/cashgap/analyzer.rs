//! Cash-gap reconciliation of receivables against payables.
//!
//! Computes total and near-term (30/60-day) net gaps, a forward
//! monthly timeline with a running cash balance, a four-tier risk
//! level, and an ordered recommendation list. The reference date is
//! always caller-supplied; the analyzer never reads a clock.

use crate::core::record::RecordSet;
use crate::core::tier::RiskTier;
use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Default timeline length in months.
pub const DEFAULT_TIMELINE_MONTHS: usize = 6;

/// A near-term shortfall below this share of total AP is `Medium`.
pub const MEDIUM_SHORTFALL_RATIO: Decimal = dec!(0.10);
/// A shortfall below this share of total AP is `High`; at or above, `Critical`.
pub const HIGH_SHORTFALL_RATIO: Decimal = dec!(0.25);

/// One forward-looking month of expected AR/AP flows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePeriod {
    /// Calendar month label, `YYYY-MM`.
    pub period: String,
    pub ar_amount: Decimal,
    pub ap_amount: Decimal,
    pub net_cash_flow: Decimal,
    pub cumulative_cash: Decimal,
}

/// Full result of a cash-gap analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashGapAnalysis {
    pub total_ar: Decimal,
    pub total_ap: Decimal,
    /// `total_ar - total_ap`, exact.
    pub cash_gap: Decimal,
    pub ar_due_in_30_days: Decimal,
    pub ap_due_in_30_days: Decimal,
    pub net_gap_30_days: Decimal,
    pub ar_due_in_60_days: Decimal,
    pub ap_due_in_60_days: Decimal,
    pub net_gap_60_days: Decimal,
    pub risk_level: RiskTier,
    pub recommendations: Vec<String>,
    pub timeline: Vec<TimelinePeriod>,
}

/// Analyze a record set as of `now`, with a timeline of `months` periods.
pub fn analyze(set: &RecordSet, now: NaiveDate, months: usize) -> CashGapAnalysis {
    let total_ar = set.total_receivable();
    let total_ap = set.total_payable();

    let (ar_30, ap_30) = window_totals(set, now, 30);
    let (ar_60, ap_60) = window_totals(set, now, 60);
    let net_gap_30 = ar_30 - ap_30;
    let net_gap_60 = ar_60 - ap_60;

    let risk_level = gap_tier(net_gap_30, total_ap).max(gap_tier(net_gap_60, total_ap));

    let timeline = build_timeline(set, now, months.max(1));
    let recommendations = recommendations_for(net_gap_30, &timeline);

    CashGapAnalysis {
        total_ar,
        total_ap,
        cash_gap: total_ar - total_ap,
        ar_due_in_30_days: ar_30,
        ap_due_in_30_days: ap_30,
        net_gap_30_days: net_gap_30,
        ar_due_in_60_days: ar_60,
        ap_due_in_60_days: ap_60,
        net_gap_60_days: net_gap_60,
        risk_level,
        recommendations,
        timeline,
    }
}

/// AR and AP totals due within `days` of `now`. Already-due records
/// count: a payable that was due yesterday still needs cash this month.
fn window_totals(set: &RecordSet, now: NaiveDate, days: i64) -> (Decimal, Decimal) {
    let cutoff = now + Duration::days(days);
    let ar = set
        .receivables()
        .filter(|r| r.due_date() <= cutoff)
        .map(|r| r.amount())
        .sum();
    let ap = set
        .payables()
        .filter(|r| r.due_date() <= cutoff)
        .map(|r| r.amount())
        .sum();
    (ar, ap)
}

/// Tier a net gap against the payable exposure. A non-negative gap is
/// always `Low`; a shortfall is tiered by its share of total AP.
fn gap_tier(net_gap: Decimal, total_ap: Decimal) -> RiskTier {
    if net_gap >= Decimal::ZERO {
        return RiskTier::Low;
    }
    if total_ap == Decimal::ZERO {
        // Shortfall with no payable base to scale against.
        return RiskTier::Critical;
    }
    let ratio = -net_gap / total_ap;
    if ratio < MEDIUM_SHORTFALL_RATIO {
        RiskTier::Medium
    } else if ratio < HIGH_SHORTFALL_RATIO {
        RiskTier::High
    } else {
        RiskTier::Critical
    }
}

/// Bucket every record into `months` forward periods by due month.
/// Overdue records land in the first period; records due beyond the
/// horizon land in the last, so every amount appears exactly once.
fn build_timeline(set: &RecordSet, now: NaiveDate, months: usize) -> Vec<TimelinePeriod> {
    let mut ar_by_period = vec![Decimal::ZERO; months];
    let mut ap_by_period = vec![Decimal::ZERO; months];

    for record in set.receivables() {
        ar_by_period[period_index(now, record.due_date(), months)] += record.amount();
    }
    for record in set.payables() {
        ap_by_period[period_index(now, record.due_date(), months)] += record.amount();
    }

    let mut timeline = Vec::with_capacity(months);
    let mut cumulative = Decimal::ZERO;
    for i in 0..months {
        let net = ar_by_period[i] - ap_by_period[i];
        cumulative += net;
        timeline.push(TimelinePeriod {
            period: period_label(now, i),
            ar_amount: ar_by_period[i],
            ap_amount: ap_by_period[i],
            net_cash_flow: net,
            cumulative_cash: cumulative,
        });
    }
    timeline
}

/// Index of the period a due date falls in, clamped to the horizon.
fn period_index(now: NaiveDate, due: NaiveDate, months: usize) -> usize {
    let offset = (due.year() - now.year()) * 12 + due.month() as i32 - now.month() as i32;
    offset.clamp(0, months as i32 - 1) as usize
}

/// `YYYY-MM` label of the period `offset` months after `now`'s month.
fn period_label(now: NaiveDate, offset: usize) -> String {
    let total = now.year() * 12 + now.month() as i32 - 1 + offset as i32;
    format!("{:04}-{:02}", total.div_euclid(12), total.rem_euclid(12) + 1)
}

/// Ordered, deterministic recommendations: a lead entry when the
/// 30-day window is short, one entry per cash-negative period, and a
/// closing entry when the horizon ends cumulatively negative.
fn recommendations_for(net_gap_30: Decimal, timeline: &[TimelinePeriod]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if net_gap_30 < Decimal::ZERO {
        recommendations.push(format!(
            "Payables exceed receivables by {} over the next 30 days; secure short-term funding now",
            -net_gap_30
        ));
    }

    for period in timeline {
        if period.net_cash_flow < Decimal::ZERO {
            recommendations.push(format!(
                "Net outflow of {} expected in {}; accelerate collections or defer payments for that month",
                -period.net_cash_flow, period.period
            ));
        }
    }

    if let Some(last) = timeline.last() {
        if last.cumulative_cash < Decimal::ZERO {
            recommendations.push(format!(
                "Cumulative position is {} at the end of the horizon; a structural financing gap needs closing",
                last.cumulative_cash
            ));
        }
    }

    recommendations
}

//! Aging classification of individual AR/AP line items.
//!
//! Buckets each record by how far past due it is and combines the
//! bucket with the amount's materiality into a per-item risk tier.
//! All time arithmetic runs off a caller-supplied reference date.

use crate::core::record::{LedgerRecord, RecordError, RecordSet, RecordSide};
use crate::core::tier::RiskTier;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Fixed day-range aging buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgingBucket {
    #[serde(rename = "0-30")]
    Current,
    #[serde(rename = "30-60")]
    Days31To60,
    #[serde(rename = "60-90")]
    Days61To90,
    #[serde(rename = "90+")]
    Over90,
}

impl AgingBucket {
    /// Bucket by days past due. Not-yet-due records (negative days)
    /// fall in the `0-30` bucket.
    pub fn from_days(aging_days: i64) -> Self {
        if aging_days <= 30 {
            AgingBucket::Current
        } else if aging_days <= 60 {
            AgingBucket::Days31To60
        } else if aging_days <= 90 {
            AgingBucket::Days61To90
        } else {
            AgingBucket::Over90
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgingBucket::Current => "0-30",
            AgingBucket::Days31To60 => "30-60",
            AgingBucket::Days61To90 => "60-90",
            AgingBucket::Over90 => "90+",
        }
    }

    /// The tier an aged balance starts at before materiality escalation.
    fn base_tier(&self) -> RiskTier {
        match self {
            AgingBucket::Current => RiskTier::Low,
            AgingBucket::Days31To60 => RiskTier::Medium,
            AgingBucket::Days61To90 => RiskTier::High,
            AgingBucket::Over90 => RiskTier::Critical,
        }
    }
}

impl fmt::Display for AgingBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Settlement status of an aged record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgingStatus {
    Outstanding,
    Paid,
    Overdue,
}

impl AgingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgingStatus::Outstanding => "outstanding",
            AgingStatus::Paid => "paid",
            AgingStatus::Overdue => "overdue",
        }
    }
}

impl fmt::Display for AgingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified AR/AP line item, ready for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgingRecord {
    pub id: Uuid,
    pub counterparty: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub current_amount: Decimal,
    pub aging_days: i64,
    pub aging_bucket: AgingBucket,
    pub status: AgingStatus,
    pub risk_level: RiskTier,
}

/// Whole days between the due date and the reference date.
/// Positive means past due; negative means not yet due. Calendar-day
/// difference, so year boundaries classify correctly.
pub fn aging_days(now: NaiveDate, due_date: NaiveDate) -> i64 {
    (now - due_date).num_days()
}

/// Classify one record against a reference date and a materiality
/// threshold. Balances at or above the threshold escalate one tier:
/// a large overdue invoice is riskier than a small one of the same age.
pub fn classify(
    record: &LedgerRecord,
    now: NaiveDate,
    materiality: Decimal,
) -> Result<AgingRecord, RecordError> {
    if materiality <= Decimal::ZERO {
        return Err(RecordError::InvalidMateriality {
            threshold: materiality,
        });
    }

    let days = aging_days(now, record.due_date());
    let bucket = AgingBucket::from_days(days);

    let status = if record.is_settled() {
        AgingStatus::Paid
    } else if days > 0 {
        AgingStatus::Overdue
    } else {
        AgingStatus::Outstanding
    };

    let mut risk_level = bucket.base_tier();
    if record.amount() >= materiality {
        risk_level = risk_level.escalate();
    }

    Ok(AgingRecord {
        id: record.id(),
        counterparty: record.counterparty().to_string(),
        invoice_date: record.invoice_date(),
        due_date: record.due_date(),
        current_amount: record.amount(),
        aging_days: days,
        aging_bucket: bucket,
        status,
        risk_level,
    })
}

/// Classify every record on one side of the ledger, in insertion order.
pub fn classify_side(
    set: &RecordSet,
    side: RecordSide,
    now: NaiveDate,
    materiality: Decimal,
) -> Result<Vec<AgingRecord>, RecordError> {
    set.records()
        .iter()
        .filter(|r| r.side() == side)
        .map(|r| classify(r, now, materiality))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(amount: Decimal, due: NaiveDate) -> LedgerRecord {
        LedgerRecord::new("ACME", amount, due - chrono::Duration::days(30), due, RecordSide::Receivable)
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(AgingBucket::from_days(0), AgingBucket::Current);
        assert_eq!(AgingBucket::from_days(30), AgingBucket::Current);
        assert_eq!(AgingBucket::from_days(31), AgingBucket::Days31To60);
        assert_eq!(AgingBucket::from_days(60), AgingBucket::Days31To60);
        assert_eq!(AgingBucket::from_days(61), AgingBucket::Days61To90);
        assert_eq!(AgingBucket::from_days(90), AgingBucket::Days61To90);
        assert_eq!(AgingBucket::from_days(91), AgingBucket::Over90);
        assert_eq!(AgingBucket::from_days(-5), AgingBucket::Current);
    }

    #[test]
    fn test_aging_days_across_year_boundary() {
        let due = date(2023, 12, 20);
        let now = date(2024, 1, 10);
        assert_eq!(aging_days(now, due), 21);
    }

    #[test]
    fn test_not_yet_due_is_outstanding() {
        let r = record(dec!(100), date(2024, 4, 15));
        let classified = classify(&r, date(2024, 4, 1), dec!(10_000)).unwrap();
        assert_eq!(classified.aging_days, -14);
        assert_eq!(classified.status, AgingStatus::Outstanding);
        assert_eq!(classified.aging_bucket, AgingBucket::Current);
        assert_eq!(classified.risk_level, RiskTier::Low);
    }

    #[test]
    fn test_overdue_status() {
        let r = record(dec!(100), date(2024, 3, 1));
        let classified = classify(&r, date(2024, 3, 15), dec!(10_000)).unwrap();
        assert_eq!(classified.aging_days, 14);
        assert_eq!(classified.status, AgingStatus::Overdue);
    }

    #[test]
    fn test_paid_status_wins() {
        let r = record(dec!(100), date(2024, 1, 1)).settle();
        let classified = classify(&r, date(2024, 6, 1), dec!(10_000)).unwrap();
        assert_eq!(classified.status, AgingStatus::Paid);
        // Still bucketed and tiered by age.
        assert_eq!(classified.aging_bucket, AgingBucket::Over90);
    }

    #[test]
    fn test_material_amount_escalates_tier() {
        let due = date(2024, 2, 1);
        let now = date(2024, 3, 15); // 43 days past due -> 30-60 -> Medium
        let small = classify(&record(dec!(500), due), now, dec!(10_000)).unwrap();
        let large = classify(&record(dec!(50_000), due), now, dec!(10_000)).unwrap();
        assert_eq!(small.risk_level, RiskTier::Medium);
        assert_eq!(large.risk_level, RiskTier::High);
    }

    #[test]
    fn test_escalation_caps_at_critical() {
        let due = date(2023, 1, 1);
        let now = date(2024, 1, 1); // 90+ -> Critical
        let classified = classify(&record(dec!(1_000_000), due), now, dec!(10_000)).unwrap();
        assert_eq!(classified.risk_level, RiskTier::Critical);
    }

    #[test]
    fn test_invalid_materiality_rejected() {
        let r = record(dec!(100), date(2024, 1, 1));
        assert!(classify(&r, date(2024, 1, 1), Decimal::ZERO).is_err());
        assert!(classify(&r, date(2024, 1, 1), dec!(-5)).is_err());
    }

    #[test]
    fn test_bucket_serde_labels() {
        assert_eq!(serde_json::to_string(&AgingBucket::Over90).unwrap(), "\"90+\"");
        assert_eq!(serde_json::to_string(&AgingBucket::Days31To60).unwrap(), "\"30-60\"");
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors arising from malformed AR/AP boundary input.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record '{reference}' has no due date")]
    MissingDueDate { reference: String },
    #[error("materiality threshold must be positive, got {threshold}")]
    InvalidMateriality { threshold: Decimal },
}

/// Which side of the ledger a record sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSide {
    /// Accounts receivable: money owed to the entity.
    Receivable,
    /// Accounts payable: money the entity owes.
    Payable,
}

/// A single outstanding receivable or payable line item.
///
/// This is the atomic input of the cash-gap and aging analyses.
/// Records are immutable once created (settlement produces a new
/// record via [`LedgerRecord::settle`]); the engine classifies them
/// but never mutates persisted invoice data.
///
/// # Examples
///
/// ```
/// use risk_engine::core::record::{LedgerRecord, RecordSide};
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let invoice = LedgerRecord::new(
///     "ACME-0042",
///     dec!(12_500),
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
///     RecordSide::Receivable,
/// );
/// assert_eq!(invoice.amount(), dec!(12_500));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Unique identifier for this line item.
    id: Uuid,
    /// Counterparty name or account reference.
    counterparty: String,
    /// Outstanding amount. Must be positive.
    amount: Decimal,
    /// When the invoice was issued.
    invoice_date: NaiveDate,
    /// When payment falls due.
    due_date: NaiveDate,
    /// Receivable or payable.
    side: RecordSide,
    /// Whether the record has been settled.
    settled: bool,
}

impl LedgerRecord {
    /// Create a new outstanding record.
    ///
    /// # Panics
    ///
    /// Panics if `amount` is not positive.
    pub fn new(
        counterparty: impl Into<String>,
        amount: Decimal,
        invoice_date: NaiveDate,
        due_date: NaiveDate,
        side: RecordSide,
    ) -> Self {
        assert!(
            amount > Decimal::ZERO,
            "Record amount must be positive, got {}",
            amount
        );
        Self {
            id: Uuid::new_v4(),
            counterparty: counterparty.into(),
            amount,
            invoice_date,
            due_date,
            side,
            settled: false,
        }
    }

    /// Create a record with a specific ID (useful for testing / determinism).
    pub fn with_id(
        id: Uuid,
        counterparty: impl Into<String>,
        amount: Decimal,
        invoice_date: NaiveDate,
        due_date: NaiveDate,
        side: RecordSide,
    ) -> Self {
        assert!(amount > Decimal::ZERO);
        Self {
            id,
            counterparty: counterparty.into(),
            amount,
            invoice_date,
            due_date,
            side,
            settled: false,
        }
    }

    /// Mark the record as settled.
    pub fn settle(mut self) -> Self {
        self.settled = true;
        self
    }

    // --- Accessors ---

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn counterparty(&self) -> &str {
        &self.counterparty
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn invoice_date(&self) -> NaiveDate {
        self.invoice_date
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn side(&self) -> RecordSide {
        self.side
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

/// A collection of AR/AP records submitted to the analyzers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    records: Vec<LedgerRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn add(&mut self, record: LedgerRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[LedgerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unsettled records on the given side.
    pub fn outstanding(&self, side: RecordSide) -> impl Iterator<Item = &LedgerRecord> {
        self.records
            .iter()
            .filter(move |r| r.side() == side && !r.is_settled())
    }

    pub fn receivables(&self) -> impl Iterator<Item = &LedgerRecord> {
        self.outstanding(RecordSide::Receivable)
    }

    pub fn payables(&self) -> impl Iterator<Item = &LedgerRecord> {
        self.outstanding(RecordSide::Payable)
    }

    /// Total outstanding receivable amount regardless of due date.
    pub fn total_receivable(&self) -> Decimal {
        self.receivables().map(|r| r.amount()).sum()
    }

    /// Total outstanding payable amount regardless of due date.
    pub fn total_payable(&self) -> Decimal {
        self.payables().map(|r| r.amount()).sum()
    }
}

impl FromIterator<LedgerRecord> for RecordSet {
    fn from_iter<T: IntoIterator<Item = LedgerRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

//! Transaction model
//!
//! The canonical record produced by classification: a dated, categorized
//! amount with its GST treatment and business flag. Category and business
//! flag are user-correctable after creation; everything else is replaced
//! wholesale when edited.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::category::Direction;
use super::gst::GstCode;
use super::ids::TransactionId;
use super::money::Money;

/// A classified bank transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Transaction date
    pub date: NaiveDate,

    /// Free-text description from the bank statement or manual entry
    pub description: String,

    /// Magnitude of the transaction (always non-negative; the sign lives in
    /// `direction`)
    pub amount: Money,

    /// Whether this is income or an expense
    pub direction: Direction,

    /// Category key into the catalog namespace matching `direction`
    pub category: String,

    /// GST treatment, derived from the category at classification time
    pub gst_code: GstCode,

    /// Whether this transaction counts toward business/BAS reporting
    ///
    /// Derived at classification time but independently editable afterwards.
    pub is_business: bool,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction record
    ///
    /// `amount` is stored as its absolute value; callers carry the sign in
    /// `direction`.
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        direction: Direction,
        category: impl Into<String>,
        gst_code: GstCode,
        is_business: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            date,
            description: description.into(),
            amount: amount.abs(),
            direction,
            category: category.into(),
            gst_code,
            is_business,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach notes, builder-style
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// The signed amount: negative for expenses, positive for income
    pub fn signed_amount(&self) -> Money {
        match self.direction {
            Direction::Income => self.amount,
            Direction::Expense => -self.amount,
        }
    }

    /// Mark the record as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
            "Officeworks Stationery",
            Money::from_cents(6700),
            Direction::Expense,
            "office",
            GstCode::Gst,
            true,
        )
    }

    #[test]
    fn test_new_stores_magnitude() {
        let txn = Transaction::new(
            NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
            "refund",
            Money::from_cents(-500),
            Direction::Expense,
            "personal_other",
            GstCode::BasExcluded,
            false,
        );
        assert_eq!(txn.amount, Money::from_cents(500));
    }

    #[test]
    fn test_signed_amount() {
        let txn = sample();
        assert_eq!(txn.signed_amount(), Money::from_cents(-6700));

        let mut income = sample();
        income.direction = Direction::Income;
        assert_eq!(income.signed_amount(), Money::from_cents(6700));
    }

    #[test]
    fn test_serialized_shape() {
        let txn = sample();
        let json = serde_json::to_value(&txn).unwrap();

        // Persisted contract: ISO date string, cents magnitude, wire enums
        assert_eq!(json["date"], "2024-07-05");
        assert_eq!(json["amount"], 6700);
        assert_eq!(json["direction"], "expense");
        assert_eq!(json["category"], "office");
        assert_eq!(json["gst_code"], "GST");
        assert_eq!(json["is_business"], true);

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, txn.id);
        assert_eq!(back.amount, txn.amount);
    }
}

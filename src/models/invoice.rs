//! Invoice model
//!
//! Simple invoice records for tracking money owed by clients. Invoices are
//! standalone records; they do not feed the aggregation engine (a paid
//! invoice shows up in the books when the payment lands in the bank feed).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::gst::GST_RATE;
use super::ids::InvoiceId;
use super::money::Money;

/// Lifecycle status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Not yet sent to the client
    #[default]
    Draft,
    /// Sent and awaiting payment
    Sent,
    /// Payment received
    Paid,
    /// Sent and past its due date
    Overdue,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "Draft"),
            Self::Sent => write!(f, "Sent"),
            Self::Paid => write!(f, "Paid"),
            Self::Overdue => write!(f, "Overdue"),
        }
    }
}

impl FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "sent" => Ok(Self::Sent),
            "paid" => Ok(Self::Paid),
            "overdue" => Ok(Self::Overdue),
            other => Err(format!("Unknown invoice status: {}", other)),
        }
    }
}

/// An invoice issued to a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier
    pub id: InvoiceId,

    /// Invoice number, e.g. "INV-1042"
    pub number: String,

    /// Client name
    pub client: String,

    /// What the invoice is for
    #[serde(default)]
    pub description: String,

    /// Line amount excluding GST
    pub amount: Money,

    /// GST added on top of the amount
    pub gst: Money,

    /// Total payable (amount + gst)
    pub total: Money,

    /// Issue date
    pub date: NaiveDate,

    /// Payment due date
    pub due_date: NaiveDate,

    /// Current status
    #[serde(default)]
    pub status: InvoiceStatus,

    /// When the invoice was created
    pub created_at: DateTime<Utc>,

    /// When the invoice was last modified
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Create a new draft invoice, computing GST on top of the ex-GST amount
    pub fn new(
        number: impl Into<String>,
        client: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        due_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        let gst = amount.gst_on_top(GST_RATE);
        Self {
            id: InvoiceId::new(),
            number: number.into(),
            client: client.into(),
            description: String::new(),
            amount,
            gst,
            total: amount + gst,
            date,
            due_date,
            status: InvoiceStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a description, builder-style
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether this invoice should display as overdue on the given date
    ///
    /// Applies to sent (or already-overdue) invoices past their due date;
    /// drafts and paid invoices never show as overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.status {
            InvoiceStatus::Sent | InvoiceStatus::Overdue => today > self.due_date,
            InvoiceStatus::Draft | InvoiceStatus::Paid => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_gst_computed_on_top() {
        let inv = Invoice::new(
            "INV-1042",
            "Acme Corp",
            Money::from_cents(330000),
            date(2024, 7, 3),
            date(2024, 7, 17),
        );
        assert_eq!(inv.gst, Money::from_cents(33000));
        assert_eq!(inv.total, Money::from_cents(363000));
        assert_eq!(inv.status, InvoiceStatus::Draft);
    }

    #[test]
    fn test_overdue_detection() {
        let mut inv = Invoice::new(
            "INV-1043",
            "StartupXYZ",
            Money::from_cents(165000),
            date(2024, 7, 8),
            date(2024, 7, 22),
        );

        // Drafts never show as overdue
        assert!(!inv.is_overdue(date(2024, 8, 1)));

        inv.status = InvoiceStatus::Sent;
        assert!(!inv.is_overdue(date(2024, 7, 22)));
        assert!(inv.is_overdue(date(2024, 7, 23)));

        inv.status = InvoiceStatus::Paid;
        assert!(!inv.is_overdue(date(2024, 8, 1)));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("paid".parse::<InvoiceStatus>().unwrap(), InvoiceStatus::Paid);
        assert_eq!("Sent".parse::<InvoiceStatus>().unwrap(), InvoiceStatus::Sent);
        assert!("void".parse::<InvoiceStatus>().is_err());
    }

    #[test]
    fn test_serialization() {
        let inv = Invoice::new(
            "INV-1044",
            "Local Bakery",
            Money::from_cents(88000),
            date(2024, 7, 12),
            date(2024, 8, 12),
        );
        let json = serde_json::to_value(&inv).unwrap();
        assert_eq!(json["status"], "draft");
        assert_eq!(json["amount"], 88000);

        let back: Invoice = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, inv.id);
        assert_eq!(back.total, inv.total);
    }
}

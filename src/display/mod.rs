//! Display formatting for terminal output
//!
//! Provides table rows for the list commands (rendered with `tabled`) and
//! small formatting helpers shared by the report printers.

use tabled::Tabled;

use crate::catalog;
use crate::models::{Invoice, Money, Transaction};

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money) -> String {
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", amount) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", amount) // Green for positive
    } else {
        amount.to_string()
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// A transaction row for the list table
#[derive(Tabled)]
pub struct TransactionRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "GST")]
    pub gst: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Biz")]
    pub business: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        let label = catalog::category(txn.direction, &txn.category)
            .map(|c| format!("{} {}", c.icon, c.label))
            .unwrap_or_else(|| txn.category.clone());

        Self {
            id: txn.id.to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            description: truncate(&txn.description, 36),
            category: label,
            gst: txn.gst_code.label().to_string(),
            amount: txn.signed_amount().to_string(),
            business: if txn.is_business { "✓" } else { "" }.to_string(),
        }
    }
}

/// An invoice row for the list table
#[derive(Tabled)]
pub struct InvoiceRow {
    #[tabled(rename = "Number")]
    pub number: String,
    #[tabled(rename = "Client")]
    pub client: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Total")]
    pub total: String,
    #[tabled(rename = "Due")]
    pub due: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl From<&Invoice> for InvoiceRow {
    fn from(inv: &Invoice) -> Self {
        Self {
            number: inv.number.clone(),
            client: truncate(&inv.client, 24),
            description: truncate(&inv.description, 28),
            total: inv.total.to_string(),
            due: inv.due_date.format("%Y-%m-%d").to_string(),
            status: inv.status.to_string(),
        }
    }
}

/// A catalog row for the categories listing
#[derive(Tabled)]
pub struct CategoryRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Label")]
    pub label: String,
    #[tabled(rename = "GST")]
    pub gst: String,
    #[tabled(rename = "Deductible")]
    pub deductible: String,
    #[tabled(rename = "Keywords")]
    pub keywords: String,
}

impl From<&crate::models::CategoryDef> for CategoryRow {
    fn from(def: &crate::models::CategoryDef) -> Self {
        Self {
            key: def.key.to_string(),
            label: format!("{} {}", def.icon, def.label),
            gst: def.gst.label().to_string(),
            deductible: if def.deductible { "yes" } else { "" }.to_string(),
            keywords: truncate(&def.keywords.join(", "), 48),
        }
    }
}

//! Invoice service
//!
//! CRUD for invoice records: creation with automatic numbering and GST
//! calculation, listing with overdue detection, status changes, and
//! deletion.

use chrono::NaiveDate;

use crate::error::{CashflowError, CashflowResult};
use crate::models::{Invoice, InvoiceId, InvoiceStatus, Money};
use crate::storage::Storage;

/// Invoice numbers continue from the highest existing "INV-" suffix,
/// starting here for an empty book.
const FIRST_INVOICE_NUMBER: u32 = 1001;

/// Input for creating a new invoice
#[derive(Debug, Clone)]
pub struct CreateInvoiceInput {
    pub client: String,
    pub description: Option<String>,
    /// Line amount excluding GST
    pub amount: Money,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
}

/// Service for invoice management
pub struct InvoiceService<'a> {
    storage: &'a Storage,
}

impl<'a> InvoiceService<'a> {
    /// Create a new invoice service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new draft invoice
    ///
    /// The invoice number is assigned automatically and GST is computed on
    /// top of the ex-GST amount.
    pub fn create(&self, input: CreateInvoiceInput) -> CashflowResult<Invoice> {
        if input.client.trim().is_empty() {
            return Err(CashflowError::Validation(
                "Invoice client cannot be empty".to_string(),
            ));
        }
        if input.amount.is_negative() {
            return Err(CashflowError::Validation(
                "Invoice amount cannot be negative".to_string(),
            ));
        }
        if input.due_date < input.date {
            return Err(CashflowError::Validation(
                "Invoice due date cannot precede the issue date".to_string(),
            ));
        }

        let number = format!("INV-{}", self.next_number()?);
        let mut invoice = Invoice::new(
            number,
            input.client.trim(),
            input.amount,
            input.date,
            input.due_date,
        );
        if let Some(description) = input.description {
            invoice = invoice.with_description(description);
        }

        self.storage.invoices.add(invoice.clone())?;
        Ok(invoice)
    }

    /// Get an invoice by ID
    pub fn get(&self, id: InvoiceId) -> CashflowResult<Invoice> {
        self.storage
            .invoices
            .get(id)?
            .ok_or_else(|| CashflowError::invoice_not_found(id.to_string()))
    }

    /// Find an invoice by its number (e.g. "INV-1042")
    pub fn find_by_number(&self, number: &str) -> CashflowResult<Invoice> {
        self.storage
            .invoices
            .get_all()?
            .into_iter()
            .find(|inv| inv.number.eq_ignore_ascii_case(number.trim()))
            .ok_or_else(|| CashflowError::invoice_not_found(number))
    }

    /// List all invoices, newest first, refreshing overdue statuses
    ///
    /// Sent invoices past their due date are surfaced as overdue; the stored
    /// status is not modified (the flip is a display-time derivation).
    pub fn list(&self, today: NaiveDate) -> CashflowResult<Vec<Invoice>> {
        let mut invoices = self.storage.invoices.get_all()?;
        for inv in &mut invoices {
            if inv.is_overdue(today) {
                inv.status = InvoiceStatus::Overdue;
            }
        }
        invoices.sort_by(|a, b| b.date.cmp(&a.date).then(b.number.cmp(&a.number)));
        Ok(invoices)
    }

    /// Change an invoice's status
    pub fn set_status(&self, id: InvoiceId, status: InvoiceStatus) -> CashflowResult<Invoice> {
        let mut invoice = self.get(id)?;
        invoice.status = status;
        invoice.updated_at = chrono::Utc::now();
        self.storage.invoices.update(invoice.clone())?;
        Ok(invoice)
    }

    /// Delete an invoice
    pub fn delete(&self, id: InvoiceId) -> CashflowResult<()> {
        self.storage.invoices.delete(id)
    }

    /// The next free invoice number suffix
    fn next_number(&self) -> CashflowResult<u32> {
        let highest = self
            .storage
            .invoices
            .get_all()?
            .iter()
            .filter_map(|inv| inv.number.strip_prefix("INV-"))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max();

        Ok(match highest {
            Some(n) => n + 1,
            None => FIRST_INVOICE_NUMBER,
        })
    }
}

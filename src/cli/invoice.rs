//! Invoice CLI commands
//!
//! Implements CLI commands for invoice management.

use chrono::{Duration, Local};
use clap::Subcommand;
use tabled::settings::Style;
use tabled::Table;

use super::transaction::parse_date_or_today;
use crate::display::InvoiceRow;
use crate::error::{CashflowError, CashflowResult};
use crate::models::{InvoiceStatus, Money};
use crate::services::{CreateInvoiceInput, InvoiceService};
use crate::storage::Storage;

/// Default payment terms when no due date is given
const DEFAULT_TERMS_DAYS: i64 = 14;

/// Invoice subcommands
#[derive(Subcommand)]
pub enum InvoiceCommands {
    /// Create a new draft invoice (GST is added on top of the amount)
    Add {
        /// Client name
        client: String,
        /// Amount excluding GST (e.g., "1500.00")
        amount: String,
        /// What the invoice is for
        #[arg(short, long)]
        description: Option<String>,
        /// Issue date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Due date (YYYY-MM-DD), defaults to 14 days after the issue date
        #[arg(long)]
        due: Option<String>,
    },
    /// List invoices
    List,
    /// Change an invoice's status (draft, sent, paid, overdue)
    Status {
        /// Invoice number (e.g., "INV-1042")
        number: String,
        /// New status
        status: String,
    },
    /// Delete an invoice
    Delete {
        /// Invoice number
        number: String,
    },
}

/// Handle an invoice subcommand
pub fn handle_invoice_command(storage: &Storage, command: InvoiceCommands) -> CashflowResult<()> {
    let service = InvoiceService::new(storage);

    match command {
        InvoiceCommands::Add {
            client,
            amount,
            description,
            date,
            due,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| CashflowError::Validation(e.to_string()))?;
            let date = parse_date_or_today(date.as_deref())?;
            let due_date = match due.as_deref() {
                Some(raw) => parse_date_or_today(Some(raw))?,
                None => date + Duration::days(DEFAULT_TERMS_DAYS),
            };

            let invoice = service.create(CreateInvoiceInput {
                client,
                description,
                amount,
                date,
                due_date,
            })?;
            storage.save_all()?;

            println!(
                "Created {} for {}: {} + {} GST = {} (due {})",
                invoice.number, invoice.client, invoice.amount, invoice.gst, invoice.total,
                invoice.due_date
            );
        }
        InvoiceCommands::List => {
            let invoices = service.list(Local::now().date_naive())?;
            if invoices.is_empty() {
                println!("No invoices yet.");
                return Ok(());
            }

            let rows: Vec<InvoiceRow> = invoices.iter().map(InvoiceRow::from).collect();
            println!("{}", Table::new(rows).with(Style::rounded()));
        }
        InvoiceCommands::Status { number, status } => {
            let status: InvoiceStatus = status
                .parse()
                .map_err(CashflowError::Validation)?;
            let invoice = service.find_by_number(&number)?;
            let invoice = service.set_status(invoice.id, status)?;
            storage.save_all()?;
            println!("{} is now {}", invoice.number, invoice.status);
        }
        InvoiceCommands::Delete { number } => {
            let invoice = service.find_by_number(&number)?;
            service.delete(invoice.id)?;
            storage.save_all()?;
            println!("Deleted {}", invoice.number);
        }
    }

    Ok(())
}

//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management: manual entry,
//! listing, re-categorization, business-flag corrections, and deletion.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use tabled::settings::Style;
use tabled::Table;

use crate::display::TransactionRow;
use crate::error::{CashflowError, CashflowResult};
use crate::models::{Direction, Money};
use crate::services::{ManualEntry, TransactionFilter, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a transaction manually (auto-categorized unless --category is given)
    Add {
        /// Signed amount (e.g., "-67.00" for an expense, "3300" for income)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description (drives auto-categorization)
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Category key override (must match the amount's direction)
        #[arg(short, long)]
        category: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List transactions
    List {
        /// Filter by direction (income, expense)
        #[arg(short, long)]
        direction: Option<String>,
        /// Show business transactions only
        #[arg(long, conflicts_with = "personal")]
        business: bool,
        /// Show personal transactions only
        #[arg(long)]
        personal: bool,
        /// Show uncategorized transactions only
        #[arg(short, long)]
        uncategorized: bool,
        /// Filter by month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Search description and notes
        #[arg(short, long)]
        query: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Move a transaction to a different category
    Categorize {
        /// Transaction ID (full UUID or txn-xxxxxxxx short form)
        id: String,
        /// New category key (see `cashflow categories`)
        category: String,
    },
    /// Set or clear the business flag
    Business {
        /// Transaction ID
        id: String,
        /// true/false
        flag: bool,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction subcommand
pub fn handle_transaction_command(
    storage: &Storage,
    command: TransactionCommands,
) -> CashflowResult<()> {
    let service = TransactionService::new(storage);

    match command {
        TransactionCommands::Add {
            amount,
            description,
            date,
            category,
            notes,
        } => {
            let signed_amount = Money::parse(&amount)
                .map_err(|e| CashflowError::Validation(e.to_string()))?;
            let date = parse_date_or_today(date.as_deref())?;

            let txn = service.add(ManualEntry {
                date,
                description,
                signed_amount,
                category,
                notes,
            })?;
            storage.save_all()?;

            println!(
                "Added {} {} {} ({}{})",
                txn.id,
                txn.date,
                txn.signed_amount(),
                txn.category,
                if txn.is_business { ", business" } else { "" }
            );
        }
        TransactionCommands::List {
            direction,
            business,
            personal,
            uncategorized,
            month,
            query,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(direction) = direction {
                let direction: Direction = direction
                    .parse()
                    .map_err(CashflowError::Validation)?;
                filter = filter.direction(direction);
            }
            if business {
                filter = filter.business(true);
            }
            if personal {
                filter = filter.business(false);
            }
            if uncategorized {
                filter = filter.uncategorized();
            }
            if let Some(month) = month {
                filter = filter.month(month);
            }
            if let Some(query) = query {
                filter = filter.query(query);
            }

            let transactions = service.list(&filter)?;
            if transactions.is_empty() {
                println!("No transactions found.");
                return Ok(());
            }

            let rows: Vec<TransactionRow> = transactions.iter().map(TransactionRow::from).collect();
            println!("{}", Table::new(rows).with(Style::rounded()));
        }
        TransactionCommands::Categorize { id, category } => {
            let id = service.resolve_id(&id)?;
            let txn = service.recategorize(id, &category)?;
            storage.save_all()?;
            println!("Moved {} to {} ({})", txn.id, txn.category, txn.gst_code.label());
        }
        TransactionCommands::Business { id, flag } => {
            let id = service.resolve_id(&id)?;
            let txn = service.set_business(id, flag)?;
            storage.save_all()?;
            println!(
                "Marked {} as {}",
                txn.id,
                if txn.is_business { "business" } else { "personal" }
            );
        }
        TransactionCommands::Delete { id } => {
            let id = service.resolve_id(&id)?;
            service.delete(id)?;
            storage.save_all()?;
            println!("Deleted {}", id);
        }
    }

    Ok(())
}

/// Parse a YYYY-MM-DD date argument, defaulting to today
pub fn parse_date_or_today(raw: Option<&str>) -> CashflowResult<NaiveDate> {
    match raw {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| CashflowError::Validation(format!("Invalid date (want YYYY-MM-DD): {}", s))),
        None => Ok(Local::now().date_naive()),
    }
}

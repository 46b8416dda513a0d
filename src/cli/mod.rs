//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod export;
pub mod import;
pub mod invoice;
pub mod report;
pub mod transaction;

pub use category::{handle_categories_command, CategoriesArgs};
pub use export::{handle_export_command, ExportCommands};
pub use import::handle_import_command;
pub use invoice::{handle_invoice_command, InvoiceCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

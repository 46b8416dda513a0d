//! Export module for cashflow-cli
//!
//! Provides CSV export of the transaction register and the deduction
//! schedule (spreadsheet-compatible, accountant-friendly).

pub mod csv;

pub use csv::{export_deductions_csv, export_transactions_csv};

//! Core data models for cashflow-cli
//!
//! This module contains all the data structures that represent the
//! bookkeeping domain: money, transactions, categories, GST codes, fiscal
//! quarters, and invoices.

pub mod category;
pub mod gst;
pub mod ids;
pub mod invoice;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{CategoryDef, Direction};
pub use gst::{GstCode, GST_RATE};
pub use ids::{InvoiceId, TransactionId};
pub use invoice::{Invoice, InvoiceStatus};
pub use money::Money;
pub use period::{month_key, FiscalQuarter};
pub use transaction::Transaction;

//! Service layer for cashflow-cli
//!
//! The service layer provides business logic on top of the storage layer:
//! classification, normalization, imports, manual entry, and invoicing.

pub mod classifier;
pub mod demo;
pub mod import;
pub mod invoice;
pub mod normalizer;
pub mod transaction;

pub use classifier::{classify, Classification};
pub use demo::seed_demo_data;
pub use import::{ImportResult, ImportService};
pub use invoice::{CreateInvoiceInput, InvoiceService};
pub use normalizer::{derive_business_flag, normalize};
pub use transaction::{ManualEntry, TransactionFilter, TransactionService};

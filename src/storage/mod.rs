//! Storage layer for cashflow-cli
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Repositories hold the in-memory working set; mutations are
//! persisted by an explicit `save_all` at the end of each command.

pub mod file_io;
pub mod invoices;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use invoices::InvoiceRepository;
pub use transactions::TransactionRepository;

use crate::config::paths::CashflowPaths;
use crate::error::CashflowError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: CashflowPaths,
    pub transactions: TransactionRepository,
    pub invoices: InvoiceRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: CashflowPaths) -> Result<Self, CashflowError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            invoices: InvoiceRepository::new(paths.invoices_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CashflowPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), CashflowError> {
        self.transactions.load()?;
        self.invoices.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), CashflowError> {
        self.transactions.save()?;
        self.invoices.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.transactions.get_all().unwrap().len(), 0);
    }

    #[test]
    fn test_save_all_load_all() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());

        {
            let storage = Storage::new(paths.clone()).unwrap();
            let txn = crate::services::normalize(
                chrono::NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
                "Officeworks Stationery",
                crate::models::Money::from_cents(-6700),
            );
            storage.transactions.add(txn).unwrap();
            storage.save_all().unwrap();
        }

        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        assert_eq!(storage.transactions.get_all().unwrap().len(), 1);
    }
}

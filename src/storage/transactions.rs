//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CashflowError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), CashflowError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for txn in file_data.transactions {
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), CashflowError> {
        let data = self
            .data
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = TransactionData { transactions };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, CashflowError> {
        let data = self
            .data
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, CashflowError> {
        let data = self
            .data
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(transactions)
    }

    /// Add a new transaction
    pub fn add(&self, txn: Transaction) -> Result<(), CashflowError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.contains_key(&txn.id) {
            return Err(CashflowError::Duplicate {
                entity_type: "Transaction",
                identifier: txn.id.to_string(),
            });
        }

        data.insert(txn.id, txn);
        Ok(())
    }

    /// Replace an existing transaction
    pub fn update(&self, txn: Transaction) -> Result<(), CashflowError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if !data.contains_key(&txn.id) {
            return Err(CashflowError::transaction_not_found(txn.id.to_string()));
        }

        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> Result<(), CashflowError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.remove(&id)
            .map(|_| ())
            .ok_or_else(|| CashflowError::transaction_not_found(id.to_string()))
    }

    /// Number of stored transactions
    pub fn count(&self) -> Result<usize, CashflowError> {
        let data = self
            .data
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

//! Invoice repository for JSON storage
//!
//! Manages loading and saving invoices to invoices.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CashflowError;
use crate::models::{Invoice, InvoiceId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable invoice data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct InvoiceData {
    invoices: Vec<Invoice>,
}

/// Repository for invoice persistence
pub struct InvoiceRepository {
    path: PathBuf,
    data: RwLock<HashMap<InvoiceId, Invoice>>,
}

impl InvoiceRepository {
    /// Create a new invoice repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load invoices from disk
    pub fn load(&self) -> Result<(), CashflowError> {
        let file_data: InvoiceData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for invoice in file_data.invoices {
            data.insert(invoice.id, invoice);
        }

        Ok(())
    }

    /// Save invoices to disk
    pub fn save(&self) -> Result<(), CashflowError> {
        let data = self
            .data
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut invoices: Vec<_> = data.values().cloned().collect();
        invoices.sort_by(|a, b| b.date.cmp(&a.date).then(b.number.cmp(&a.number)));

        let file_data = InvoiceData { invoices };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an invoice by ID
    pub fn get(&self, id: InvoiceId) -> Result<Option<Invoice>, CashflowError> {
        let data = self
            .data
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all invoices, newest first
    pub fn get_all(&self) -> Result<Vec<Invoice>, CashflowError> {
        let data = self
            .data
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut invoices: Vec<_> = data.values().cloned().collect();
        invoices.sort_by(|a, b| b.date.cmp(&a.date).then(b.number.cmp(&a.number)));
        Ok(invoices)
    }

    /// Add a new invoice
    pub fn add(&self, invoice: Invoice) -> Result<(), CashflowError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.contains_key(&invoice.id) {
            return Err(CashflowError::Duplicate {
                entity_type: "Invoice",
                identifier: invoice.id.to_string(),
            });
        }

        data.insert(invoice.id, invoice);
        Ok(())
    }

    /// Replace an existing invoice
    pub fn update(&self, invoice: Invoice) -> Result<(), CashflowError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if !data.contains_key(&invoice.id) {
            return Err(CashflowError::invoice_not_found(invoice.id.to_string()));
        }

        data.insert(invoice.id, invoice);
        Ok(())
    }

    /// Delete an invoice
    pub fn delete(&self, id: InvoiceId) -> Result<(), CashflowError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.remove(&id)
            .map(|_| ())
            .ok_or_else(|| CashflowError::invoice_not_found(id.to_string()))
    }
}

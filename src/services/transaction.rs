//! Transaction service
//!
//! Provides business logic for transaction management: manual entry (with
//! auto-classification), filtering, re-categorization, business-flag
//! corrections, and deletion. All edits are wholesale replacement of the
//! stored record; derived aggregates are recomputed from the full snapshot
//! by the reporting layer.

use chrono::NaiveDate;

use super::normalizer::{derive_business_flag, normalize};
use crate::catalog;
use crate::error::{CashflowError, CashflowResult};
use crate::models::{Direction, FiscalQuarter, Money, Transaction, TransactionId};
use crate::storage::Storage;

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by flow direction
    pub direction: Option<Direction>,
    /// Filter by business flag
    pub business: Option<bool>,
    /// Only catch-all (uncategorized) transactions
    pub uncategorized_only: bool,
    /// Filter by calendar month key ("YYYY-MM")
    pub month: Option<String>,
    /// Filter by fiscal quarter
    pub quarter: Option<FiscalQuarter>,
    /// Case-insensitive substring match on description and notes
    pub query: Option<String>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by direction
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Filter by business flag
    pub fn business(mut self, business: bool) -> Self {
        self.business = Some(business);
        self
    }

    /// Only uncategorized transactions
    pub fn uncategorized(mut self) -> Self {
        self.uncategorized_only = true;
        self
    }

    /// Filter by month key
    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    /// Filter by fiscal quarter
    pub fn quarter(mut self, quarter: FiscalQuarter) -> Self {
        self.quarter = Some(quarter);
        self
    }

    /// Filter by description/notes substring
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        if let Some(direction) = self.direction {
            if txn.direction != direction {
                return false;
            }
        }
        if let Some(business) = self.business {
            if txn.is_business != business {
                return false;
            }
        }
        if self.uncategorized_only && !catalog::is_catch_all_key(&txn.category) {
            return false;
        }
        if let Some(month) = &self.month {
            if crate::models::month_key(txn.date) != *month {
                return false;
            }
        }
        if let Some(quarter) = &self.quarter {
            if !quarter.contains(txn.date) {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let q = query.to_lowercase();
            if !txn.description.to_lowercase().contains(&q)
                && !txn.notes.to_lowercase().contains(&q)
            {
                return false;
            }
        }
        true
    }
}

/// Input for creating a transaction manually
#[derive(Debug, Clone)]
pub struct ManualEntry {
    pub date: NaiveDate,
    pub description: String,
    /// Signed amount: negative for expenses
    pub signed_amount: Money,
    /// Category override; auto-classified when absent
    pub category: Option<String>,
    pub notes: Option<String>,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a transaction from manual entry
    ///
    /// Runs the classifier unless a category override is given. Overrides
    /// are validated against the catalog namespace matching the amount's
    /// sign, and the GST code and business flag are derived from the chosen
    /// category.
    pub fn add(&self, entry: ManualEntry) -> CashflowResult<Transaction> {
        let mut txn = normalize(entry.date, &entry.description, entry.signed_amount);

        if let Some(key) = entry.category {
            let def = catalog::category(txn.direction, &key)
                .ok_or_else(|| CashflowError::category_not_found(key.clone()))?;
            txn.category = def.key.to_string();
            txn.gst_code = def.gst;
            txn.is_business = derive_business_flag(txn.direction, def.key);
        }

        if let Some(notes) = entry.notes {
            txn.notes = notes;
        }

        self.storage.transactions.add(txn.clone())?;
        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> CashflowResult<Transaction> {
        self.storage
            .transactions
            .get(id)?
            .ok_or_else(|| CashflowError::transaction_not_found(id.to_string()))
    }

    /// List transactions matching a filter, newest first
    pub fn list(&self, filter: &TransactionFilter) -> CashflowResult<Vec<Transaction>> {
        let mut txns: Vec<Transaction> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();

        txns.sort_by(|a, b| b.date.cmp(&a.date).then(a.created_at.cmp(&b.created_at)));

        if let Some(limit) = filter.limit {
            txns.truncate(limit);
        }
        Ok(txns)
    }

    /// Move a transaction to a different category
    ///
    /// The new key must exist in the namespace matching the transaction's
    /// direction. The GST code is re-derived from the new category; the
    /// business flag is left alone (it is independently editable).
    pub fn recategorize(&self, id: TransactionId, category: &str) -> CashflowResult<Transaction> {
        let mut txn = self.get(id)?;

        let def = catalog::category(txn.direction, category)
            .ok_or_else(|| CashflowError::category_not_found(category.to_string()))?;

        txn.category = def.key.to_string();
        txn.gst_code = def.gst;
        txn.touch();

        self.storage.transactions.update(txn.clone())?;
        Ok(txn)
    }

    /// Set the business flag on a transaction
    pub fn set_business(&self, id: TransactionId, is_business: bool) -> CashflowResult<Transaction> {
        let mut txn = self.get(id)?;
        txn.is_business = is_business;
        txn.touch();
        self.storage.transactions.update(txn.clone())?;
        Ok(txn)
    }

    /// Replace the notes on a transaction
    pub fn set_notes(&self, id: TransactionId, notes: impl Into<String>) -> CashflowResult<Transaction> {
        let mut txn = self.get(id)?;
        txn.notes = notes.into();
        txn.touch();
        self.storage.transactions.update(txn.clone())?;
        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> CashflowResult<()> {
        self.storage.transactions.delete(id)
    }

    /// Resolve a short or full transaction ID string
    ///
    /// Accepts a full UUID or the `txn-xxxxxxxx` short display form (any
    /// unique prefix of the UUID after the `txn-` marker).
    pub fn resolve_id(&self, input: &str) -> CashflowResult<TransactionId> {
        if let Ok(id) = input.parse::<TransactionId>() {
            if self.storage.transactions.get(id)?.is_some() {
                return Ok(id);
            }
        }

        let needle = input.strip_prefix("txn-").unwrap_or(input).to_lowercase();
        let matches: Vec<TransactionId> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| t.id.as_uuid().to_string().starts_with(&needle))
            .map(|t| t.id)
            .collect();

        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(CashflowError::transaction_not_found(input)),
            _ => Err(CashflowError::Validation(format!(
                "Ambiguous transaction ID: {}",
                input
            ))),
        }
    }
}

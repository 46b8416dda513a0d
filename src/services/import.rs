//! CSV Import service
//!
//! Ingests bank-statement CSV exports: sniffs the column layout from the
//! header row, parses dates and amounts defensively, and runs every row
//! through the classifier/normalizer. Unparseable rows are skipped and
//! counted rather than failing the import.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{Reader, StringRecord};

use super::normalizer::normalize;
use crate::error::{CashflowError, CashflowResult};
use crate::models::{Money, Transaction};
use crate::storage::Storage;

/// Column layout detected from a statement's header row
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Index of the date column
    pub date: usize,
    /// Index of the description/narration column
    pub description: Option<usize>,
    /// Index of a single signed amount column
    pub amount: Option<usize>,
    /// Index of the credit (money in) column, when split
    pub credit: Option<usize>,
    /// Index of the debit (money out) column, when split
    pub debit: Option<usize>,
}

impl ColumnMapping {
    /// Detect the column layout from a header row
    ///
    /// Returns `None` when no date column can be identified; the file is
    /// not usable as a statement in that case.
    pub fn detect(headers: &StringRecord) -> Option<Self> {
        let names: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();

        let date = names.iter().position(|n| n.contains("date"))?;

        let description = names.iter().position(|n| {
            ["desc", "narr", "detail", "memo", "ref", "particular", "transaction"]
                .iter()
                .any(|p| n.contains(p))
        });

        let amount = names.iter().position(|n| n == "amount");

        let claimed = |i: usize| Some(i) == description || i == date || Some(i) == amount;
        let credit = names
            .iter()
            .enumerate()
            .position(|(i, n)| !claimed(i) && (n.contains("credit") || n.contains("deposit") || n == "cr"));
        let debit = names
            .iter()
            .enumerate()
            .position(|(i, n)| !claimed(i) && (n.contains("debit") || n.contains("withdrawal") || n == "dr"));

        Some(Self {
            date,
            description,
            amount,
            credit,
            debit,
        })
    }
}

/// Outcome of an import run
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Number of transactions added
    pub imported: usize,
    /// Number of rows skipped (unparseable date)
    pub skipped: usize,
}

/// Service for importing bank statement CSVs
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Parse a statement from a reader into classified transactions
    ///
    /// Returns the parsed transactions and the count of skipped rows.
    pub fn parse_reader<R: Read>(&self, reader: R) -> CashflowResult<(Vec<Transaction>, usize)> {
        let mut csv_reader = Reader::from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| CashflowError::Import(format!("Failed to read CSV header: {}", e)))?
            .clone();

        let mapping = ColumnMapping::detect(&headers).ok_or_else(|| {
            CashflowError::Import("No date column found in CSV header".to_string())
        })?;

        let mut transactions = Vec::new();
        let mut skipped = 0;

        for result in csv_reader.records() {
            let record =
                result.map_err(|e| CashflowError::Import(format!("Malformed CSV row: {}", e)))?;

            let raw_date = record.get(mapping.date).unwrap_or("");
            let Some(date) = parse_statement_date(raw_date) else {
                skipped += 1;
                continue;
            };

            let signed_amount = extract_amount(&record, &mapping);
            let description = extract_description(&record, &mapping, &headers);

            transactions.push(normalize(date, &description, signed_amount));
        }

        Ok((transactions, skipped))
    }

    /// Import a statement from a reader, appending to the store
    pub fn import_reader<R: Read>(&self, reader: R) -> CashflowResult<ImportResult> {
        let (transactions, skipped) = self.parse_reader(reader)?;
        let imported = transactions.len();

        for txn in transactions {
            self.storage.transactions.add(txn)?;
        }

        Ok(ImportResult { imported, skipped })
    }

    /// Import a statement from a CSV file on disk
    pub fn import_file(&self, path: &Path) -> CashflowResult<ImportResult> {
        let file = File::open(path).map_err(|e| {
            CashflowError::Import(format!("Failed to open {}: {}", path.display(), e))
        })?;
        self.import_reader(file)
    }
}

/// Pull the signed amount out of a record per the detected mapping
///
/// Invalid or missing amounts resolve to zero; the record still imports and
/// classifies (as income, by the zero-sign convention) rather than erroring.
fn extract_amount(record: &StringRecord, mapping: &ColumnMapping) -> Money {
    if let Some(i) = mapping.amount {
        return parse_amount(record.get(i).unwrap_or(""));
    }

    let credit = mapping
        .credit
        .map(|i| parse_amount(record.get(i).unwrap_or("")))
        .unwrap_or_default();
    let debit = mapping
        .debit
        .map(|i| parse_amount(record.get(i).unwrap_or("")))
        .unwrap_or_default();

    if credit.is_positive() {
        credit
    } else {
        -debit.abs()
    }
}

/// Pull the best-available description out of a record
///
/// Falls back to joining the unclaimed columns, then to a placeholder, so
/// every imported row has something for the classifier to chew on.
fn extract_description(
    record: &StringRecord,
    mapping: &ColumnMapping,
    headers: &StringRecord,
) -> String {
    if let Some(i) = mapping.description {
        let desc = record.get(i).unwrap_or("").trim();
        if !desc.is_empty() {
            return desc.to_string();
        }
    }

    let claimed = [
        Some(mapping.date),
        mapping.description,
        mapping.amount,
        mapping.credit,
        mapping.debit,
    ];
    let joined: Vec<&str> = (0..headers.len())
        .filter(|i| !claimed.contains(&Some(*i)))
        .filter_map(|i| record.get(i))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();

    if joined.is_empty() {
        "Unknown Transaction".to_string()
    } else {
        joined.join(" ")
    }
}

/// Parse a currency amount from statement text
///
/// Strips currency symbols and thousands separators. Unparseable input
/// resolves to zero by design.
fn parse_amount(raw: &str) -> Money {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    Money::parse(&cleaned).unwrap_or_default()
}

/// Parse a statement date, trying common Australian bank formats
///
/// Day-first and ISO forms with 2- and 4-digit years, with month-first as a
/// last resort.
pub fn parse_statement_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    // Two-digit-year forms go first: %Y happily consumes a 2-digit year, so
    // trying ISO before them would turn "05-07-24" into the year 5.
    const FORMATS: &[&str] = &[
        "%d/%m/%y",
        "%d-%m-%y",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%d/%m/%Y",
        "%d-%m-%Y",
        "%m/%d/%Y",
    ];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CashflowPaths;
    use crate::models::Direction;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage) {
        let temp = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp, storage)
    }

    #[test]
    fn test_detect_simple_layout() {
        let headers = StringRecord::from(vec!["Date", "Description", "Amount"]);
        let mapping = ColumnMapping::detect(&headers).unwrap();
        assert_eq!(mapping.date, 0);
        assert_eq!(mapping.description, Some(1));
        assert_eq!(mapping.amount, Some(2));
        assert_eq!(mapping.credit, None);
    }

    #[test]
    fn test_detect_split_credit_debit() {
        let headers = StringRecord::from(vec!["Date", "Narration", "Debit", "Credit", "Balance"]);
        let mapping = ColumnMapping::detect(&headers).unwrap();
        assert_eq!(mapping.description, Some(1));
        assert_eq!(mapping.amount, None);
        assert_eq!(mapping.debit, Some(2));
        assert_eq!(mapping.credit, Some(3));
    }

    #[test]
    fn test_detect_requires_date() {
        let headers = StringRecord::from(vec!["Description", "Amount"]);
        assert!(ColumnMapping::detect(&headers).is_none());
    }

    #[test]
    fn test_description_column_not_claimed_as_credit() {
        // "description" contains "cr"-adjacent letters; it must not be
        // mistaken for a credit column.
        let headers = StringRecord::from(vec!["Date", "Description", "Credit", "Debit"]);
        let mapping = ColumnMapping::detect(&headers).unwrap();
        assert_eq!(mapping.description, Some(1));
        assert_eq!(mapping.credit, Some(2));
        assert_eq!(mapping.debit, Some(3));
    }

    #[test]
    fn test_parse_statement_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 7, 5).unwrap();
        assert_eq!(parse_statement_date("2024-07-05"), Some(expected));
        assert_eq!(parse_statement_date("05/07/2024"), Some(expected));
        assert_eq!(parse_statement_date("05-07-24"), Some(expected));
        assert_eq!(parse_statement_date("not a date"), None);
        assert_eq!(parse_statement_date(""), None);
    }

    #[test]
    fn test_parse_amount_cleanup() {
        assert_eq!(parse_amount("$1,234.56"), Money::from_cents(123456));
        assert_eq!(parse_amount("-67.00"), Money::from_cents(-6700));
        assert_eq!(parse_amount("garbage"), Money::zero());
    }

    #[test]
    fn test_import_classifies_rows() {
        let (_temp, storage) = setup();
        let service = ImportService::new(&storage);

        let csv = "Date,Description,Amount\n\
                   2024-07-05,Officeworks Stationery,-67.00\n\
                   2024-07-06,Client Invoice #1042,3300.00\n";
        let result = service.import_reader(csv.as_bytes()).unwrap();
        assert_eq!(result.imported, 2);
        assert_eq!(result.skipped, 0);

        let txns = storage.transactions.get_all().unwrap();
        let office = txns.iter().find(|t| t.category == "office").unwrap();
        assert_eq!(office.direction, Direction::Expense);
        assert_eq!(office.amount, Money::from_cents(6700));
        assert!(office.is_business);

        let sales = txns.iter().find(|t| t.category == "sales_income").unwrap();
        assert_eq!(sales.direction, Direction::Income);
        assert_eq!(sales.amount, Money::from_cents(330000));
    }

    #[test]
    fn test_import_split_columns_and_skips() {
        let (_temp, storage) = setup();
        let service = ImportService::new(&storage);

        let csv = "Date,Narration,Debit,Credit\n\
                   05/07/2024,Woolworths Weekly Shop,156.00,\n\
                   06/07/2024,Salary Direct Deposit,,5200.00\n\
                   bad-date,Something,1.00,\n";
        let result = service.import_reader(csv.as_bytes()).unwrap();
        assert_eq!(result.imported, 2);
        assert_eq!(result.skipped, 1);

        let txns = storage.transactions.get_all().unwrap();
        let groceries = txns.iter().find(|t| t.category == "groceries").unwrap();
        assert_eq!(groceries.direction, Direction::Expense);

        let salary = txns.iter().find(|t| t.category == "salary_income").unwrap();
        assert_eq!(salary.direction, Direction::Income);
        assert_eq!(salary.amount, Money::from_cents(520000));
    }

    #[test]
    fn test_missing_description_fallback() {
        let (_temp, storage) = setup();
        let service = ImportService::new(&storage);

        let csv = "Date,Amount,Branch\n\
                   2024-07-05,-20.00,George St\n\
                   2024-07-06,-30.00,\n";
        let result = service.import_reader(csv.as_bytes()).unwrap();
        assert_eq!(result.imported, 2);

        let txns = storage.transactions.get_all().unwrap();
        assert!(txns.iter().any(|t| t.description == "George St"));
        assert!(txns.iter().any(|t| t.description == "Unknown Transaction"));
    }
}

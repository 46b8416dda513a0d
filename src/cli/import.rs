//! Import CLI command
//!
//! Bridges the import service to the command line: reads a bank CSV,
//! reports what was classified, and nudges toward the uncategorized review
//! when keyword matching came up empty.

use std::path::PathBuf;

use crate::error::CashflowResult;
use crate::reports::aggregate;
use crate::services::ImportService;
use crate::storage::Storage;

/// Handle the import command
pub fn handle_import_command(storage: &Storage, file: PathBuf) -> CashflowResult<()> {
    let service = ImportService::new(storage);
    let result = service.import_file(&file)?;
    storage.save_all()?;

    println!(
        "Imported {} transactions from {}",
        result.imported,
        file.display()
    );
    if result.skipped > 0 {
        println!("Skipped {} rows with unreadable dates", result.skipped);
    }

    let views = aggregate(&storage.transactions.get_all()?);
    if views.uncategorized_count > 0 {
        println!(
            "{} transactions need categorization; run `cashflow txn list --uncategorized`",
            views.uncategorized_count
        );
    }

    Ok(())
}

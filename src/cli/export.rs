//! Export CLI commands
//!
//! Writes the transaction register or the deduction schedule to a CSV file
//! or stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{CashflowError, CashflowResult};
use crate::export::{export_deductions_csv, export_transactions_csv};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export every transaction with category and GST details
    Transactions {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the deduction schedule (deductible expenses by category)
    Deductions {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export subcommand
pub fn handle_export_command(storage: &Storage, command: ExportCommands) -> CashflowResult<()> {
    match command {
        ExportCommands::Transactions { output } => {
            write_export(output, |w| export_transactions_csv(storage, w))
        }
        ExportCommands::Deductions { output } => {
            write_export(output, |w| export_deductions_csv(storage, w))
        }
    }
}

fn write_export<F>(output: Option<PathBuf>, export: F) -> CashflowResult<()>
where
    F: FnOnce(&mut dyn Write) -> CashflowResult<()>,
{
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                CashflowError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export(&mut writer)?;
            writer
                .flush()
                .map_err(|e| CashflowError::Export(e.to_string()))?;
            println!("Exported to {}", path.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            export(&mut lock)
        }
    }
}

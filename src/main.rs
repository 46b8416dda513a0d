use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use cashflow_cli::cli::{
    handle_categories_command, handle_export_command, handle_import_command,
    handle_invoice_command, handle_report_command, handle_transaction_command, CategoriesArgs,
    ExportCommands, InvoiceCommands, ReportCommands, TransactionCommands,
};
use cashflow_cli::config::{CashflowPaths, Settings};
use cashflow_cli::services::seed_demo_data;
use cashflow_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "cashflow",
    author = "Kaylee Beyene",
    version,
    about = "Terminal bookkeeping for Australian sole traders",
    long_about = "cashflow imports bank statement CSVs, auto-categorizes every \
                  transaction into income and expense tax categories, tracks GST \
                  for quarterly BAS reporting, generates P&L statements, and \
                  manages simple invoices."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a bank statement CSV
    Import {
        /// Path to the CSV file
        file: PathBuf,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Reporting commands (summary, BAS, P&L, categories)
    #[command(subcommand)]
    Report(ReportCommands),

    /// Invoice management commands
    #[command(subcommand)]
    Invoice(InvoiceCommands),

    /// Export data to CSV
    #[command(subcommand)]
    Export(ExportCommands),

    /// List the category catalog
    Categories(CategoriesArgs),

    /// Seed six months of demo data into an empty book
    Demo,

    /// Initialize the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CashflowPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Commands::Import { file } => {
            handle_import_command(&storage, file)?;
        }
        Commands::Transaction(cmd) => {
            handle_transaction_command(&storage, cmd)?;
        }
        Commands::Report(cmd) => {
            handle_report_command(&storage, cmd)?;
        }
        Commands::Invoice(cmd) => {
            handle_invoice_command(&storage, cmd)?;
        }
        Commands::Export(cmd) => {
            handle_export_command(&storage, cmd)?;
        }
        Commands::Categories(args) => {
            handle_categories_command(args)?;
        }
        Commands::Demo => {
            let count = seed_demo_data(&storage, Local::now().date_naive())?;
            storage.save_all()?;
            println!("Seeded {} demo transactions. Try `cashflow report summary`.", count);
        }
        Commands::Init => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialized cashflow data in {}", paths.base_dir().display());
        }
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Transactions:   {}", paths.transactions_file().display());
            println!("Invoices:       {}", paths.invoices_file().display());
            println!("Currency:       {}", settings.currency_symbol);
            println!("Date format:    {}", settings.date_format);
            println!("List limit:     {}", settings.list_limit);
            println!("Initialized:    {}", paths.is_initialized());
        }
    }

    Ok(())
}

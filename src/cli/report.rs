//! CLI commands for reports
//!
//! Prints the monthly summary, BAS quarter figures, profit & loss, and the
//! expense category breakdown. Every report recomputes its views from the
//! full transaction snapshot.

use clap::Subcommand;

use crate::display::{format_bar, format_money_colored, format_percentage};
use crate::error::{CashflowError, CashflowResult};
use crate::models::FiscalQuarter;
use crate::reports::{aggregate, BasStatement, PlPeriod, PlReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Monthly cash-flow summary with overall totals
    Summary,
    /// BAS quarter figures (G1/1A/G11/1B and net owing)
    Bas {
        /// Quarter label (e.g., "Q1 FY2025"); defaults to the current quarter
        #[arg(short, long)]
        quarter: Option<String>,
        /// Show every quarter in the book
        #[arg(long, conflicts_with = "quarter")]
        all: bool,
    },
    /// Profit & loss over business transactions
    #[command(alias = "pl")]
    ProfitLoss {
        /// Limit to one month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Limit to one fiscal year (e.g., 2025 for FY2025)
        #[arg(long, conflicts_with = "month")]
        fy: Option<i32>,
    },
    /// Expense breakdown by category
    Categories,
}

/// Handle a report subcommand
pub fn handle_report_command(storage: &Storage, command: ReportCommands) -> CashflowResult<()> {
    let transactions = storage.transactions.get_all()?;

    match command {
        ReportCommands::Summary => {
            let views = aggregate(&transactions);

            if views.monthly.is_empty() {
                println!("No transactions yet. Import a statement or run `cashflow demo`.");
                return Ok(());
            }

            println!("{:<9} {:>12} {:>12} {:>12}", "Month", "Income", "Expenses", "Net");
            println!("{}", "─".repeat(48));
            for month in &views.monthly {
                println!(
                    "{:<9} {:>12} {:>12} {:>21}",
                    month.month,
                    month.income.to_string(),
                    month.expenses.to_string(),
                    format_money_colored(month.net())
                );
            }
            println!("{}", "─".repeat(48));

            let totals = &views.totals;
            println!("Total income:      {}", totals.income);
            println!("Total expenses:    {}", totals.expenses);
            println!("Net savings:       {}", format_money_colored(totals.net_savings()));
            println!("Business income:   {}", totals.business_income);
            println!("Business expenses: {}", totals.business_expenses);
            println!("Deductible:        {}", totals.deductible);

            if views.uncategorized_count > 0 {
                println!(
                    "\n{} transactions need categorization; run `cashflow txn list --uncategorized`",
                    views.uncategorized_count
                );
            }
        }
        ReportCommands::Bas { quarter, all } => {
            if all {
                let statements = BasStatement::generate_all(&transactions);
                if statements.is_empty() {
                    println!("No transactions yet.");
                    return Ok(());
                }
                for statement in statements {
                    print_bas(&statement);
                    println!();
                }
            } else {
                let quarter = match quarter {
                    Some(label) => label
                        .parse::<FiscalQuarter>()
                        .map_err(CashflowError::Validation)?,
                    None => FiscalQuarter::current(),
                };
                print_bas(&BasStatement::generate(&transactions, quarter));
            }
        }
        ReportCommands::ProfitLoss { month, fy } => {
            let period = match (month, fy) {
                (Some(month), _) => PlPeriod::Month(month),
                (None, Some(fy)) => PlPeriod::FiscalYear(fy),
                (None, None) => PlPeriod::All,
            };
            let report = PlReport::generate(&transactions, period);

            println!("Profit & Loss ({})", report.period.describe());
            println!();
            println!("Revenue");
            for line in &report.revenue {
                println!("  {:<28} {:>12}", line.label, line.amount.to_string());
            }
            println!("  {:<28} {:>12}", "Total Revenue", report.total_revenue.to_string());
            println!();
            println!("Expenses");
            for line in &report.expenses {
                println!("  {:<28} {:>12}", line.label, line.amount.to_string());
            }
            println!("  {:<28} {:>12}", "Total Expenses", report.total_expenses.to_string());
            println!();
            println!(
                "Net Profit: {}",
                format_money_colored(report.net_profit())
            );
        }
        ReportCommands::Categories => {
            let views = aggregate(&transactions);

            if views.category_totals.is_empty() {
                println!("No expenses yet.");
                return Ok(());
            }

            let grand_total = views.totals.expenses;
            let max = views.category_totals[0].total;
            for cat in &views.category_totals {
                let share = if grand_total.is_zero() {
                    0.0
                } else {
                    cat.total.cents() as f64 / grand_total.cents() as f64 * 100.0
                };
                println!(
                    "{:<26} {:>12}  {} {:>6}  ({})",
                    cat.label,
                    cat.total.to_string(),
                    format_bar(cat.total.cents() as f64, max.cents() as f64, 16),
                    format_percentage(share),
                    cat.count
                );
            }
        }
    }

    Ok(())
}

fn print_bas(statement: &BasStatement) {
    println!("BAS {}  ({} to {})", statement.quarter, statement.quarter.start_date(), statement.quarter.end_date());
    println!("  G1  Total sales:      {}", statement.total_sales);
    println!("  1A  GST collected:    {}", statement.gst_collected);
    println!("  G11 Total purchases:  {}", statement.total_purchases);
    println!("  1B  GST credits:      {}", statement.gst_credits);
    if statement.is_refund() {
        println!("  Refund due:           {}", -statement.net_owing());
    } else {
        println!("  Net GST owing:        {}", statement.net_owing());
    }
}

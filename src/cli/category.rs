//! Category catalog CLI command
//!
//! Lists the fixed category catalog so users can find valid keys for
//! `cashflow txn categorize` and `cashflow txn add --category`.

use clap::Args;
use tabled::settings::Style;
use tabled::Table;

use crate::catalog;
use crate::display::CategoryRow;
use crate::error::{CashflowError, CashflowResult};
use crate::models::Direction;

/// Arguments for the categories command
#[derive(Args)]
pub struct CategoriesArgs {
    /// Limit to one direction (income, expense)
    #[arg(short, long)]
    pub direction: Option<String>,
}

/// Handle the categories command
pub fn handle_categories_command(args: CategoriesArgs) -> CashflowResult<()> {
    let directions: Vec<Direction> = match args.direction {
        Some(raw) => vec![raw.parse().map_err(CashflowError::Validation)?],
        None => Direction::all().to_vec(),
    };

    for direction in directions {
        println!("{} categories:", direction);
        let rows: Vec<CategoryRow> = catalog::categories(direction)
            .iter()
            .map(CategoryRow::from)
            .collect();
        println!("{}", Table::new(rows).with(Style::rounded()));
    }

    Ok(())
}

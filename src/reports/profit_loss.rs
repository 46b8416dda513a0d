//! Profit & Loss report
//!
//! Business-only revenue and expense breakdown grouped by category label,
//! for the whole book, one calendar month, or one fiscal year.

use std::collections::HashMap;

use crate::catalog;
use crate::models::{month_key, Direction, FiscalQuarter, Money, Transaction};

/// Period selector for the P&L
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlPeriod {
    /// Every business transaction in the book
    #[default]
    All,
    /// One calendar month ("YYYY-MM")
    Month(String),
    /// One fiscal year (July-start, labelled by its ending calendar year)
    FiscalYear(i32),
}

impl PlPeriod {
    fn includes(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Month(month) => month_key(txn.date) == *month,
            Self::FiscalYear(fy) => FiscalQuarter::for_date(txn.date).fiscal_year == *fy,
        }
    }

    /// Human-readable period description
    pub fn describe(&self) -> String {
        match self {
            Self::All => "all time".to_string(),
            Self::Month(month) => month.clone(),
            Self::FiscalYear(fy) => format!("FY{}", fy),
        }
    }
}

/// One category line on the P&L
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlLine {
    /// Category display label
    pub label: String,
    /// Summed magnitude
    pub amount: Money,
}

/// A profit & loss statement over business-flagged transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlReport {
    /// The period covered
    pub period: PlPeriod,
    /// Revenue lines, descending by amount
    pub revenue: Vec<PlLine>,
    /// Expense lines, descending by amount
    pub expenses: Vec<PlLine>,
    /// Total revenue
    pub total_revenue: Money,
    /// Total expenses
    pub total_expenses: Money,
}

impl PlReport {
    /// Net profit (negative is a loss)
    pub fn net_profit(&self) -> Money {
        self.total_revenue - self.total_expenses
    }

    /// Generate a P&L from a transaction snapshot
    ///
    /// Only business-flagged transactions participate; the flag, not the
    /// category's deductibility, decides inclusion (a personal-flagged
    /// deductible-category purchase stays out).
    pub fn generate(transactions: &[Transaction], period: PlPeriod) -> Self {
        let mut revenue: HashMap<String, Money> = HashMap::new();
        let mut expenses: HashMap<String, Money> = HashMap::new();
        let mut total_revenue = Money::zero();
        let mut total_expenses = Money::zero();

        for txn in transactions
            .iter()
            .filter(|t| t.is_business && period.includes(t))
        {
            let label = catalog::category(txn.direction, &txn.category)
                .map(|c| c.label.to_string())
                .unwrap_or_else(|| txn.category.clone());

            match txn.direction {
                Direction::Income => {
                    *revenue.entry(label).or_default() += txn.amount;
                    total_revenue += txn.amount;
                }
                Direction::Expense => {
                    *expenses.entry(label).or_default() += txn.amount;
                    total_expenses += txn.amount;
                }
            }
        }

        Self {
            period,
            revenue: into_sorted_lines(revenue),
            expenses: into_sorted_lines(expenses),
            total_revenue,
            total_expenses,
        }
    }
}

fn into_sorted_lines(map: HashMap<String, Money>) -> Vec<PlLine> {
    let mut lines: Vec<PlLine> = map
        .into_iter()
        .map(|(label, amount)| PlLine { label, amount })
        .collect();
    lines.sort_by(|a, b| b.amount.cmp(&a.amount).then(a.label.cmp(&b.label)));
    lines
}

//! Aggregation engine
//!
//! Folds the full transaction snapshot into the derived views every report
//! reads from: monthly cash-flow subtotals, expense category totals, and
//! per-fiscal-quarter GST accumulations. Aggregates hold no independent
//! state; they are recomputed wholesale whenever the transaction set
//! changes, which is the documented cost model at this data scale.

use std::collections::{BTreeMap, HashMap};

use crate::catalog;
use crate::models::{month_key, Direction, FiscalQuarter, GstCode, Money, Transaction};

/// Income/expense subtotals for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyAggregate {
    /// Month key, "YYYY-MM"
    pub month: String,
    /// All income in the month
    pub income: Money,
    /// All expenses in the month
    pub expenses: Money,
    /// Business-flagged income
    pub business_income: Money,
    /// Business-flagged expenses
    pub business_expenses: Money,
}

impl MonthlyAggregate {
    fn new(month: String) -> Self {
        Self {
            month,
            income: Money::zero(),
            expenses: Money::zero(),
            business_income: Money::zero(),
            business_expenses: Money::zero(),
        }
    }

    /// Net cash flow for the month
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }

    /// Net business cash flow for the month
    pub fn business_net(&self) -> Money {
        self.business_income - self.business_expenses
    }
}

/// Total spend for one expense category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category key
    pub key: String,
    /// Display label (falls back to the key for unknown categories)
    pub label: String,
    /// Summed expense magnitude
    pub total: Money,
    /// Number of transactions
    pub count: usize,
}

/// GST accumulation for one fiscal quarter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarterAggregate {
    /// The quarter this aggregate covers
    pub quarter: FiscalQuarter,
    /// Gross business income (G1)
    pub total_sales: Money,
    /// GST collected on business income (1A)
    pub gst_collected: Money,
    /// Gross standard-rated business purchases (G11)
    pub total_purchases: Money,
    /// GST credits on those purchases (1B)
    pub gst_credits: Money,
}

impl QuarterAggregate {
    fn new(quarter: FiscalQuarter) -> Self {
        Self {
            quarter,
            total_sales: Money::zero(),
            gst_collected: Money::zero(),
            total_purchases: Money::zero(),
            gst_credits: Money::zero(),
        }
    }

    /// Net GST position: positive means payable, negative means refund due
    pub fn net_owing(&self) -> Money {
        self.gst_collected - self.gst_credits
    }
}

/// Overall totals across the whole snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
    pub business_income: Money,
    pub business_expenses: Money,
    /// Expenses in deductible categories
    pub deductible: Money,
}

impl Totals {
    /// Net savings across all transactions
    pub fn net_savings(&self) -> Money {
        self.income - self.expenses
    }
}

/// Every derived view, produced by a single pass over the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateViews {
    /// Monthly subtotals, ascending by month key
    pub monthly: Vec<MonthlyAggregate>,
    /// Expense totals per category, descending by total
    pub category_totals: Vec<CategoryTotal>,
    /// GST accumulations keyed by quarter label
    pub quarters: BTreeMap<String, QuarterAggregate>,
    /// Overall totals
    pub totals: Totals,
    /// Transactions sitting in either catch-all category
    pub uncategorized_count: usize,
}

impl AggregateViews {
    /// Quarter aggregates in chronological order
    pub fn quarters_chronological(&self) -> Vec<&QuarterAggregate> {
        let mut quarters: Vec<&QuarterAggregate> = self.quarters.values().collect();
        quarters.sort_by_key(|q| q.quarter);
        quarters
    }
}

/// Fold a transaction snapshot into all derived views
///
/// Never fails: transactions are valid by construction, and an empty input
/// yields empty views. The fold is deterministic and idempotent: calling it
/// twice over the same snapshot produces identical results.
pub fn aggregate(transactions: &[Transaction]) -> AggregateViews {
    let mut monthly: BTreeMap<String, MonthlyAggregate> = BTreeMap::new();
    let mut category_cents: HashMap<&str, (Money, usize)> = HashMap::new();
    let mut quarters: BTreeMap<String, QuarterAggregate> = BTreeMap::new();
    let mut totals = Totals::default();
    let mut uncategorized_count = 0;

    for txn in transactions {
        // Classification always produces a key from the matching namespace;
        // anything else is a bug upstream, not recoverable data.
        debug_assert!(
            catalog::category(txn.direction, &txn.category).is_some(),
            "transaction {} references unknown category {}",
            txn.id,
            txn.category
        );

        // Monthly fold
        let month = month_key(txn.date);
        let entry = monthly
            .entry(month.clone())
            .or_insert_with(|| MonthlyAggregate::new(month));
        match txn.direction {
            Direction::Income => {
                entry.income += txn.amount;
                totals.income += txn.amount;
                if txn.is_business {
                    entry.business_income += txn.amount;
                    totals.business_income += txn.amount;
                }
            }
            Direction::Expense => {
                entry.expenses += txn.amount;
                totals.expenses += txn.amount;
                if txn.is_business {
                    entry.business_expenses += txn.amount;
                    totals.business_expenses += txn.amount;
                }

                // Category totals cover the expense side only
                let cat = category_cents.entry(txn.category.as_str()).or_default();
                cat.0 += txn.amount;
                cat.1 += 1;

                let deductible = catalog::category(Direction::Expense, &txn.category)
                    .map(|c| c.deductible)
                    .unwrap_or(false);
                if deductible {
                    totals.deductible += txn.amount;
                }
            }
        }

        // Quarterly GST fold. Only standard-rated flows carry a
        // collectible/claimable component; everything else contributes
        // nothing to the quarter beyond creating its entry.
        let fq = FiscalQuarter::for_date(txn.date);
        let quarter = quarters
            .entry(fq.label())
            .or_insert_with(|| QuarterAggregate::new(fq));
        if txn.is_business {
            match txn.direction {
                Direction::Income => {
                    quarter.total_sales += txn.amount;
                    quarter.gst_collected += txn.gst_code.component_of(txn.amount);
                }
                Direction::Expense if txn.gst_code == GstCode::Gst => {
                    quarter.total_purchases += txn.amount;
                    quarter.gst_credits += txn.gst_code.component_of(txn.amount);
                }
                Direction::Expense => {}
            }
        }

        if catalog::is_catch_all_key(&txn.category) {
            uncategorized_count += 1;
        }
    }

    let mut category_totals: Vec<CategoryTotal> = category_cents
        .into_iter()
        .map(|(key, (total, count))| CategoryTotal {
            label: catalog::category(Direction::Expense, key)
                .map(|c| c.label.to_string())
                .unwrap_or_else(|| key.to_string()),
            key: key.to_string(),
            total,
            count,
        })
        .collect();
    // Descending by total; key as tie-break keeps the output deterministic
    category_totals.sort_by(|a, b| b.total.cmp(&a.total).then(a.key.cmp(&b.key)));

    AggregateViews {
        monthly: monthly.into_values().collect(),
        category_totals,
        quarters,
        totals,
        uncategorized_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::normalize;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(y: i32, m: u32, d: u32, desc: &str, cents: i64) -> Transaction {
        normalize(date(y, m, d), desc, Money::from_cents(cents))
    }

    #[test]
    fn test_empty_input() {
        let views = aggregate(&[]);
        assert!(views.monthly.is_empty());
        assert!(views.category_totals.is_empty());
        assert!(views.quarters.is_empty());
        assert_eq!(views.uncategorized_count, 0);
        assert_eq!(views.totals.net_savings(), Money::zero());
    }

    #[test]
    fn test_monthly_fold_ascending() {
        let txns = vec![
            txn(2024, 8, 2, "Coles Supermarket", -10_000),
            txn(2024, 7, 6, "Salary Direct Deposit", 520_000),
            txn(2024, 7, 20, "Officeworks Stationery", -6_700),
        ];
        let views = aggregate(&txns);

        assert_eq!(views.monthly.len(), 2);
        assert_eq!(views.monthly[0].month, "2024-07");
        assert_eq!(views.monthly[1].month, "2024-08");

        let july = &views.monthly[0];
        assert_eq!(july.income, Money::from_cents(520_000));
        assert_eq!(july.expenses, Money::from_cents(6_700));
        assert_eq!(july.business_income, Money::from_cents(520_000));
        assert_eq!(july.business_expenses, Money::from_cents(6_700));
        assert_eq!(july.net(), Money::from_cents(513_300));
    }

    #[test]
    fn test_category_totals_expense_only_descending() {
        let txns = vec![
            txn(2024, 7, 1, "Coles Supermarket", -10_000),
            txn(2024, 7, 2, "Woolworths Weekly Shop", -15_000),
            txn(2024, 7, 3, "Officeworks Stationery", -6_700),
            txn(2024, 7, 4, "Client Invoice #1042", 330_000),
        ];
        let views = aggregate(&txns);

        assert_eq!(views.category_totals.len(), 2);
        assert_eq!(views.category_totals[0].key, "groceries");
        assert_eq!(views.category_totals[0].total, Money::from_cents(25_000));
        assert_eq!(views.category_totals[0].count, 2);
        assert_eq!(views.category_totals[1].key, "office");
        // Income never shows up in category totals
        assert!(!views.category_totals.iter().any(|c| c.key == "sales_income"));
    }

    #[test]
    fn test_quarterly_gst_fold() {
        // The end-to-end scenario from the reporting contract
        let txns = vec![
            txn(2024, 7, 5, "Officeworks Stationery", -6_700),
            txn(2024, 7, 6, "Client Invoice #1042", 330_000),
        ];
        let views = aggregate(&txns);

        let q1 = &views.quarters["Q1 FY2025"];
        assert_eq!(q1.total_sales, Money::from_cents(330_000));
        assert_eq!(q1.gst_collected, Money::from_cents(30_000));
        assert_eq!(q1.total_purchases, Money::from_cents(6_700));
        assert_eq!(q1.gst_credits, Money::from_cents(609));
        assert_eq!(q1.net_owing(), Money::from_cents(29_391));
    }

    #[test]
    fn test_non_standard_rate_excluded_from_quarter_numbers() {
        let txns = vec![
            // Deductible but input-taxed: business expense, no GST credit
            txn(2024, 7, 8, "Stripe Merchant Fee", -3_300),
            // Deductible but BAS-excluded
            txn(2024, 7, 9, "Australian Super Contribution", -50_000),
            // Personal expense with a GST category: not business, excluded
            txn(2024, 7, 10, "Coles Supermarket", -9_800),
        ];
        let views = aggregate(&txns);

        let q1 = &views.quarters["Q1 FY2025"];
        assert_eq!(q1.total_purchases, Money::zero());
        assert_eq!(q1.gst_credits, Money::zero());
        assert_eq!(q1.total_sales, Money::zero());
    }

    #[test]
    fn test_salary_income_counts_sales_but_no_gst() {
        // Salary is business income but BAS-excluded: gross counts toward
        // sales, collected GST stays zero.
        let txns = vec![txn(2024, 7, 6, "Salary Direct Deposit", 520_000)];
        let views = aggregate(&txns);

        let q1 = &views.quarters["Q1 FY2025"];
        assert_eq!(q1.total_sales, Money::from_cents(520_000));
        assert_eq!(q1.gst_collected, Money::zero());
    }

    #[test]
    fn test_uncategorized_count_both_directions() {
        let txns = vec![
            txn(2024, 7, 1, "zzqx mystery debit", -1_000),
            txn(2024, 7, 2, "zzqx mystery credit arrival", 1_000),
            txn(2024, 7, 3, "Coles Supermarket", -9_800),
        ];
        let views = aggregate(&txns);
        assert_eq!(views.uncategorized_count, 2);
    }

    #[test]
    fn test_idempotent() {
        let txns = vec![
            txn(2024, 7, 5, "Officeworks Stationery", -6_700),
            txn(2024, 7, 6, "Client Invoice #1042", 330_000),
            txn(2024, 2, 10, "Woolworths Weekly Shop", -15_600),
        ];
        let first = aggregate(&txns);
        let second = aggregate(&txns);
        assert_eq!(first, second);
    }

    #[test]
    fn test_quarters_chronological_ordering() {
        let txns = vec![
            txn(2024, 8, 1, "Client Invoice", 100_000),  // Q1 FY2025
            txn(2024, 2, 1, "Client Invoice", 100_000),  // Q3 FY2024
            txn(2024, 11, 1, "Client Invoice", 100_000), // Q2 FY2025
        ];
        let views = aggregate(&txns);
        let ordered: Vec<String> = views
            .quarters_chronological()
            .iter()
            .map(|q| q.quarter.label())
            .collect();
        assert_eq!(ordered, vec!["Q3 FY2024", "Q1 FY2025", "Q2 FY2025"]);
    }

    #[test]
    fn test_zero_amount_contributes_nothing() {
        let txns = vec![txn(2024, 7, 1, "zzqx placeholder entry", 0)];
        let views = aggregate(&txns);
        assert_eq!(views.totals.income, Money::zero());
        assert_eq!(views.monthly[0].income, Money::zero());
        // Still classified (income catch-all) and counted as uncategorized
        assert_eq!(views.uncategorized_count, 1);
    }
}

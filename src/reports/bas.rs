//! BAS quarterly report
//!
//! Presents one fiscal quarter's GST position in the shape of the BAS
//! labels an accountant expects: G1 total sales, 1A GST collected, G11
//! purchases, 1B GST credits, and the net amount owing (or refundable).

use crate::models::{FiscalQuarter, Money, Transaction};

use super::summary::{aggregate, AggregateViews, QuarterAggregate};

/// A single quarter's BAS figures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasStatement {
    /// The quarter covered
    pub quarter: FiscalQuarter,
    /// G1: gross business income
    pub total_sales: Money,
    /// 1A: GST collected on sales
    pub gst_collected: Money,
    /// G11: gross standard-rated business purchases
    pub total_purchases: Money,
    /// 1B: GST credits on purchases
    pub gst_credits: Money,
}

impl BasStatement {
    /// Net GST position: positive is payable to the tax office, negative is
    /// a refund due
    pub fn net_owing(&self) -> Money {
        self.gst_collected - self.gst_credits
    }

    /// Whether this quarter results in a refund
    pub fn is_refund(&self) -> bool {
        self.net_owing().is_negative()
    }

    fn from_quarter_aggregate(agg: &QuarterAggregate) -> Self {
        Self {
            quarter: agg.quarter,
            total_sales: agg.total_sales,
            gst_collected: agg.gst_collected,
            total_purchases: agg.total_purchases,
            gst_credits: agg.gst_credits,
        }
    }

    /// Pull one quarter's statement out of precomputed views
    ///
    /// A quarter with no transactions yields an all-zero statement.
    pub fn from_views(views: &AggregateViews, quarter: FiscalQuarter) -> Self {
        views
            .quarters
            .get(&quarter.label())
            .map(Self::from_quarter_aggregate)
            .unwrap_or_else(|| Self {
                quarter,
                total_sales: Money::zero(),
                gst_collected: Money::zero(),
                total_purchases: Money::zero(),
                gst_credits: Money::zero(),
            })
    }

    /// Generate a statement for one quarter from a transaction snapshot
    pub fn generate(transactions: &[Transaction], quarter: FiscalQuarter) -> Self {
        Self::from_views(&aggregate(transactions), quarter)
    }

    /// Generate statements for every quarter touched by the snapshot,
    /// chronologically
    pub fn generate_all(transactions: &[Transaction]) -> Vec<Self> {
        aggregate(transactions)
            .quarters_chronological()
            .into_iter()
            .map(Self::from_quarter_aggregate)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::normalize;
    use chrono::NaiveDate;

    fn txn(y: i32, m: u32, d: u32, desc: &str, cents: i64) -> Transaction {
        normalize(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            desc,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_end_to_end_scenario() {
        let txns = vec![
            txn(2024, 7, 5, "Officeworks Stationery", -6_700),
            txn(2024, 7, 6, "Client Invoice #1042", 330_000),
        ];

        let statement = BasStatement::generate(&txns, FiscalQuarter::new(2025, 1));
        assert_eq!(statement.total_sales, Money::from_cents(330_000));
        assert_eq!(statement.gst_collected, Money::from_cents(30_000));
        assert_eq!(statement.total_purchases, Money::from_cents(6_700));
        assert_eq!(statement.gst_credits, Money::from_cents(609));
        assert_eq!(statement.net_owing(), Money::from_cents(29_391));
        assert!(!statement.is_refund());
    }

    #[test]
    fn test_empty_quarter_is_all_zero() {
        let statement = BasStatement::generate(&[], FiscalQuarter::new(2025, 1));
        assert_eq!(statement.total_sales, Money::zero());
        assert_eq!(statement.net_owing(), Money::zero());
    }

    #[test]
    fn test_refund_quarter() {
        // Purchases only: credits exceed collections
        let txns = vec![txn(2024, 7, 5, "JB Hi-Fi Laptop", -129_900)];
        let statement = BasStatement::generate(&txns, FiscalQuarter::new(2025, 1));
        assert!(statement.is_refund());
        assert_eq!(statement.net_owing(), -statement.gst_credits);
    }

    #[test]
    fn test_generate_all_in_order() {
        let txns = vec![
            txn(2024, 11, 1, "Client Invoice", 110_000),
            txn(2024, 8, 1, "Client Invoice", 110_000),
        ];
        let statements = BasStatement::generate_all(&txns);
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].quarter.label(), "Q1 FY2025");
        assert_eq!(statements[1].quarter.label(), "Q2 FY2025");
    }
}

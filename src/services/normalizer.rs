//! Record normalizer
//!
//! Builds a canonical `Transaction` from raw statement fields plus the
//! classifier's output, deriving the business/personal flag. Date parsing
//! belongs to the import layer; this stage requires an already-valid date.

use chrono::NaiveDate;

use super::classifier::classify;
use crate::catalog;
use crate::models::{Direction, Money, Transaction};

/// Derive the default business flag for a (direction, category) pair
///
/// A transaction is business when its expense category is deductible, or
/// when it is income from anything other than the catch-all and government
/// payments. The flag stays user-editable afterwards; this only sets the
/// starting point.
pub fn derive_business_flag(direction: Direction, category: &str) -> bool {
    match direction {
        Direction::Expense => catalog::category(direction, category)
            .map(|c| c.deductible)
            .unwrap_or(false),
        Direction::Income => {
            category != catalog::CATCH_ALL_INCOME && category != "govt_income"
        }
    }
}

/// Build a canonical transaction record from raw fields
///
/// Classifies the description, stores the magnitude (the sign lives in the
/// direction), and derives the business flag. Never fails: unmatched
/// descriptions land in the catch-all category.
pub fn normalize(date: NaiveDate, description: &str, signed_amount: Money) -> Transaction {
    let c = classify(description, signed_amount);
    let is_business = derive_business_flag(c.direction, c.category);

    Transaction::new(
        date,
        description.trim(),
        signed_amount,
        c.direction,
        c.category,
        c.gst_code,
        is_business,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GstCode;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deductible_expense_is_business() {
        // vehicle is deductible: always business, whatever the description
        let txn = normalize(date(2024, 7, 1), "Ampol Petrol Station", Money::from_cents(-9200));
        assert_eq!(txn.category, "vehicle");
        assert!(txn.is_business);
    }

    #[test]
    fn test_non_deductible_expense_is_personal() {
        let txn = normalize(date(2024, 7, 1), "Coles Supermarket", Money::from_cents(-9830));
        assert_eq!(txn.category, "groceries");
        assert!(!txn.is_business);
    }

    #[test]
    fn test_income_business_by_default() {
        let txn = normalize(
            date(2024, 7, 6),
            "Client Invoice #1042",
            Money::from_cents(330000),
        );
        assert_eq!(txn.category, "sales_income");
        assert!(txn.is_business);

        let txn = normalize(date(2024, 7, 6), "Salary Direct Deposit", Money::from_cents(520000));
        assert_eq!(txn.category, "salary_income");
        assert!(txn.is_business);
    }

    #[test]
    fn test_catch_all_and_govt_income_are_personal() {
        let txn = normalize(date(2024, 7, 6), "zzqx mystery credit arrival", Money::from_cents(100));
        assert_eq!(txn.category, "other_income");
        assert!(!txn.is_business);

        let txn = normalize(
            date(2024, 7, 6),
            "Centrelink Family Tax Benefit",
            Money::from_cents(28000),
        );
        assert_eq!(txn.category, "govt_income");
        assert!(!txn.is_business);
    }

    #[test]
    fn test_magnitude_stored_unsigned() {
        let txn = normalize(date(2024, 7, 5), "Officeworks Stationery", Money::from_cents(-6700));
        assert_eq!(txn.amount, Money::from_cents(6700));
        assert_eq!(txn.direction, Direction::Expense);
        assert_eq!(txn.gst_code, GstCode::Gst);
        assert_eq!(txn.signed_amount(), Money::from_cents(-6700));
    }

    #[test]
    fn test_description_trimmed() {
        let txn = normalize(date(2024, 7, 5), "  Netflix Subscription  ", Money::from_cents(-2299));
        assert_eq!(txn.description, "Netflix Subscription");
    }
}

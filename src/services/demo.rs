//! Demo data seeding
//!
//! Seeds a deterministic sample data set so the reports have something to
//! show before any real statements are imported. The descriptions cover
//! most catalog categories; amounts are fixed (no randomness) so repeated
//! demo runs on the same day produce identical books.

use chrono::{Datelike, Duration, NaiveDate};

use super::invoice::{CreateInvoiceInput, InvoiceService};
use super::normalizer::normalize;
use crate::error::{CashflowError, CashflowResult};
use crate::models::{InvoiceStatus, Money};
use crate::storage::Storage;

/// Monthly sample items: (description, signed cents)
const DEMO_ITEMS: &[(&str, i64)] = &[
    ("Client Invoice #1042 - Web Design", 330_000),
    ("Freelance Consulting - Strategy Session", 165_000),
    ("Salary Direct Deposit", 520_000),
    ("ING Savings Interest", 1_850),
    ("Vanguard ETF Distribution", 12_000),
    ("Centrelink Family Tax Benefit", 28_000),
    ("Google Ads Campaign", -22_000),
    ("Ampol Petrol Station", -9_200),
    ("Officeworks Stationery", -6_700),
    ("Adobe Creative Cloud Subscription", -5_499),
    ("Telstra Mobile Plan", -8_900),
    ("Origin Energy Electricity", -16_500),
    ("Public Liability Insurance", -19_500),
    ("Xero Accounting Software", -3_300),
    ("H&R Block Tax Return Fee", -35_000),
    ("Qantas Flight - Client Visit MEL-SYD", -28_900),
    ("Client Lunch - Thai Restaurant", -4_800),
    ("Stripe Merchant Fee", -3_300),
    ("Udemy Course - Advanced React", -1_499),
    ("JB Hi-Fi Laptop", -129_900),
    ("Woolworths Weekly Shop", -15_600),
    ("Coles Supermarket", -9_830),
    ("Rent Payment - Home", -180_000),
    ("Netflix Subscription", -2_299),
    ("Spotify Premium", -1_299),
    ("Chemist Warehouse", -3_200),
    ("Uber Ride to Airport", -3_450),
    ("Opal Card Top Up", -5_000),
    ("Amazon AU - Books", -4_500),
    ("AAMI Car Insurance", -12_800),
    ("Kayo Sports Subscription", -2_750),
    ("Anytime Fitness Membership", -6_490),
    ("Donation - Beyond Blue", -5_000),
    ("Australian Super Contribution", -50_000),
];

/// Seed demo transactions and invoices
///
/// Generates six months of the sample items (the given date's month and the
/// five before it) plus a handful of invoices in various states. Refuses to
/// run over existing data.
pub fn seed_demo_data(storage: &Storage, today: NaiveDate) -> CashflowResult<usize> {
    if !storage.transactions.get_all()?.is_empty() {
        return Err(CashflowError::Validation(
            "Demo data can only be seeded into an empty book".to_string(),
        ));
    }

    let mut count = 0;
    for months_back in 0..6 {
        let month_start = shift_month_start(today, months_back);
        for (index, (description, cents)) in DEMO_ITEMS.iter().enumerate() {
            // Spread items across the month deterministically
            let day_offset = (index * 3 % 28) as i64;
            let date = month_start + Duration::days(day_offset);
            let txn = normalize(date, description, Money::from_cents(*cents));
            storage.transactions.add(txn)?;
            count += 1;
        }
    }

    seed_demo_invoices(storage, today)?;

    Ok(count)
}

fn seed_demo_invoices(storage: &Storage, today: NaiveDate) -> CashflowResult<()> {
    let invoices = InvoiceService::new(storage);
    let this_month = shift_month_start(today, 0);
    let last_month = shift_month_start(today, 1);

    let samples = [
        ("Acme Corp", "Web Design Package", 330_000, this_month + Duration::days(2), InvoiceStatus::Paid),
        ("StartupXYZ", "Strategy Consulting", 165_000, this_month + Duration::days(7), InvoiceStatus::Sent),
        ("Local Bakery", "Logo & Branding", 88_000, this_month + Duration::days(11), InvoiceStatus::Draft),
        ("BigCo Ltd", "Monthly Retainer", 440_000, last_month + Duration::days(4), InvoiceStatus::Sent),
    ];

    for (client, description, cents, date, status) in samples {
        let invoice = invoices.create(CreateInvoiceInput {
            client: client.to_string(),
            description: Some(description.to_string()),
            amount: Money::from_cents(cents),
            date,
            due_date: date + Duration::days(14),
        })?;
        if status != InvoiceStatus::Draft {
            invoices.set_status(invoice.id, status)?;
        }
    }

    Ok(())
}

/// First day of the month `months_back` months before the given date
fn shift_month_start(date: NaiveDate, months_back: u32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 - months_back as i32;
    let year = total.div_euclid(12);
    let month0 = total.rem_euclid(12) as u32;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CashflowPaths;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage) {
        let temp = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_seeds_six_months() {
        let (_temp, storage) = setup();
        let count = seed_demo_data(&storage, date(2024, 8, 15)).unwrap();
        assert_eq!(count, DEMO_ITEMS.len() * 6);
        assert_eq!(storage.transactions.get_all().unwrap().len(), count);
        assert_eq!(storage.invoices.get_all().unwrap().len(), 4);
    }

    #[test]
    fn test_refuses_non_empty_book() {
        let (_temp, storage) = setup();
        seed_demo_data(&storage, date(2024, 8, 15)).unwrap();
        assert!(seed_demo_data(&storage, date(2024, 8, 15)).is_err());
    }

    #[test]
    fn test_shift_month_start_crosses_year() {
        assert_eq!(shift_month_start(date(2024, 2, 20), 3), date(2023, 11, 1));
        assert_eq!(shift_month_start(date(2024, 8, 15), 0), date(2024, 8, 1));
    }

    #[test]
    fn test_demo_data_is_classified() {
        let (_temp, storage) = setup();
        seed_demo_data(&storage, date(2024, 8, 15)).unwrap();

        let txns = storage.transactions.get_all().unwrap();
        assert!(txns.iter().any(|t| t.category == "sales_income"));
        assert!(txns.iter().any(|t| t.category == "vehicle" && t.is_business));
        assert!(txns.iter().any(|t| t.category == "groceries" && !t.is_business));
    }
}

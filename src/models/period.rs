//! Reporting period representations
//!
//! Provides the Australian fiscal quarter (BAS reporting period, July-start
//! fiscal year) and the `YYYY-MM` month key used by the monthly cash-flow fold.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A BAS reporting quarter within an Australian fiscal year
///
/// Fiscal years start on 1 July and are labelled by the calendar year they
/// end in: July 2024 falls in "Q1 FY2025".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FiscalQuarter {
    /// Fiscal year label (the calendar year the fiscal year ends in)
    pub fiscal_year: i32,
    /// Quarter number, 1-4 (Q1 = Jul-Sep)
    pub quarter: u8,
}

impl FiscalQuarter {
    /// Create a fiscal quarter directly
    ///
    /// # Panics
    ///
    /// Panics if `quarter` is not in 1..=4.
    pub fn new(fiscal_year: i32, quarter: u8) -> Self {
        assert!((1..=4).contains(&quarter), "quarter must be 1-4");
        Self {
            fiscal_year,
            quarter,
        }
    }

    /// Get the fiscal quarter containing a calendar date
    ///
    /// Jul-Sep -> Q1 FY(y+1), Oct-Dec -> Q2 FY(y+1),
    /// Jan-Mar -> Q3 FY(y), Apr-Jun -> Q4 FY(y).
    pub fn for_date(date: NaiveDate) -> Self {
        let y = date.year();
        match date.month() {
            7..=9 => Self::new(y + 1, 1),
            10..=12 => Self::new(y + 1, 2),
            1..=3 => Self::new(y, 3),
            _ => Self::new(y, 4),
        }
    }

    /// Get the quarter containing today's date
    pub fn current() -> Self {
        Self::for_date(chrono::Local::now().date_naive())
    }

    /// The display label, e.g. "Q1 FY2025"
    pub fn label(&self) -> String {
        format!("Q{} FY{}", self.quarter, self.fiscal_year)
    }

    /// First calendar year touched by this quarter
    fn calendar_year(&self) -> i32 {
        match self.quarter {
            1 | 2 => self.fiscal_year - 1,
            _ => self.fiscal_year,
        }
    }

    /// Get the start date of this quarter
    pub fn start_date(&self) -> NaiveDate {
        let (year, month) = match self.quarter {
            1 => (self.calendar_year(), 7),
            2 => (self.calendar_year(), 10),
            3 => (self.calendar_year(), 1),
            _ => (self.calendar_year(), 4),
        };
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    /// Get the end date of this quarter (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let start = self.start_date();
        let next_start = if start.month() == 10 {
            NaiveDate::from_ymd_opt(start.year() + 1, 1, 1).unwrap()
        } else {
            NaiveDate::from_ymd_opt(start.year(), start.month() + 3, 1).unwrap()
        };
        next_start - Duration::days(1)
    }

    /// Check if a date falls within this quarter
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Get the next quarter
    pub fn next(&self) -> Self {
        if self.quarter == 4 {
            Self::new(self.fiscal_year + 1, 1)
        } else {
            Self::new(self.fiscal_year, self.quarter + 1)
        }
    }

    /// Get the previous quarter
    pub fn prev(&self) -> Self {
        if self.quarter == 1 {
            Self::new(self.fiscal_year - 1, 4)
        } else {
            Self::new(self.fiscal_year, self.quarter - 1)
        }
    }
}

impl fmt::Display for FiscalQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FiscalQuarter {
    type Err = String;

    /// Parse a label of the form "Q1 FY2025"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let rest = s
            .strip_prefix('Q')
            .or_else(|| s.strip_prefix('q'))
            .ok_or_else(|| format!("Invalid quarter label: {}", s))?;
        let (q, fy) = rest
            .split_once(' ')
            .ok_or_else(|| format!("Invalid quarter label: {}", s))?;
        let quarter: u8 = q
            .parse()
            .map_err(|_| format!("Invalid quarter number: {}", q))?;
        if !(1..=4).contains(&quarter) {
            return Err(format!("Quarter out of range: {}", quarter));
        }
        let fy = fy.trim();
        let fiscal_year: i32 = fy
            .strip_prefix("FY")
            .or_else(|| fy.strip_prefix("fy"))
            .unwrap_or(fy)
            .parse()
            .map_err(|_| format!("Invalid fiscal year: {}", fy))?;
        Ok(Self::new(fiscal_year, quarter))
    }
}

/// The `YYYY-MM` key used to group transactions by calendar month
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

//! Category definitions and flow direction
//!
//! Categories are static reference data (see the `catalog` module for the
//! actual tables). Each definition carries the GST treatment, deductibility,
//! and the keyword list the classifier matches against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::gst::GstCode;

/// Whether a transaction is money coming in or going out
///
/// Derived solely from the sign of the imported amount; zero is treated as
/// income by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Income,
    Expense,
}

impl Direction {
    /// All directions, income first (matches catalog namespace order)
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!("Unknown direction: {}", other)),
        }
    }
}

/// An immutable category definition
///
/// Defined once in the static catalog tables and never mutated. The keyword
/// list is lowercase and declaration-ordered; order is load-bearing for the
/// classifier's equal-length tie-break.
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    /// Unique key within its direction namespace (e.g. "vehicle")
    pub key: &'static str,
    /// Display label (e.g. "Motor Vehicle")
    pub label: &'static str,
    /// Decorative icon for display
    pub icon: &'static str,
    /// How GST applies to transactions in this category
    pub gst: GstCode,
    /// Whether expenses in this category are tax-deductible
    ///
    /// Always false for income categories; deductibility does not apply to
    /// revenue.
    pub deductible: bool,
    /// Lowercase keywords matched as substrings of the normalized description
    pub keywords: &'static [&'static str],
}

impl CategoryDef {
    /// Check whether this category has no keywords (a catch-all)
    pub fn is_catch_all(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl fmt::Display for CategoryDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Income.to_string(), "income");
        assert_eq!(Direction::Expense.to_string(), "expense");
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("income".parse::<Direction>().unwrap(), Direction::Income);
        assert_eq!("Expense".parse::<Direction>().unwrap(), Direction::Expense);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_serialization() {
        let json = serde_json::to_string(&Direction::Income).unwrap();
        assert_eq!(json, "\"income\"");
        let d: Direction = serde_json::from_str("\"expense\"").unwrap();
        assert_eq!(d, Direction::Expense);
    }

    #[test]
    fn test_catch_all_detection() {
        let def = CategoryDef {
            key: "other",
            label: "Other",
            icon: "📦",
            gst: GstCode::BasExcluded,
            deductible: false,
            keywords: &[],
        };
        assert!(def.is_catch_all());

        let def = CategoryDef {
            keywords: &["fuel"],
            ..def
        };
        assert!(!def.is_catch_all());
    }
}

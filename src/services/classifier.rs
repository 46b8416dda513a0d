//! Auto-classification engine
//!
//! Maps a freeform transaction description and signed amount to a flow
//! direction, tax category, and GST code using the static keyword catalog.
//!
//! The scoring rule is deliberately simple: the longest matching keyword
//! wins, with equal lengths resolved in catalog declaration order. This is a
//! heuristic, not a scored classifier; users correct the misses by hand.

use crate::catalog;
use crate::models::{Direction, GstCode, Money};

/// The result of classifying a description/amount pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Income or expense, from the amount sign
    pub direction: Direction,
    /// Category key, always valid in `direction`'s namespace
    pub category: &'static str,
    /// GST code carried by the winning category
    pub gst_code: GstCode,
}

/// Classify a transaction description and signed amount
///
/// Pure, total, and deterministic: every input resolves to a category (the
/// direction's catch-all when no keyword matches), and identical inputs
/// always produce identical results.
///
/// Direction comes solely from the sign of `signed_amount`; zero is treated
/// as income by convention.
pub fn classify(description: &str, signed_amount: Money) -> Classification {
    let direction = if signed_amount.is_negative() {
        Direction::Expense
    } else {
        Direction::Income
    };

    let desc = description.trim().to_lowercase();

    let mut best: Option<&'static crate::models::CategoryDef> = None;
    let mut best_len = 0;

    for cat in catalog::categories(direction) {
        for kw in cat.keywords {
            // Strictly-greater keeps the first category at any given length,
            // so declaration order breaks ties.
            if kw.len() > best_len && desc.contains(kw) {
                best = Some(cat);
                best_len = kw.len();
            }
        }
    }

    let cat = best.unwrap_or_else(|| catalog::catch_all(direction));
    Classification {
        direction,
        category: cat.key,
        gst_code: cat.gst,
    }
}

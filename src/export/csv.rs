//! CSV Export functionality
//!
//! Exports the transaction register and the deduction schedule to CSV for
//! handing to an accountant or loading into a spreadsheet.

use std::collections::HashMap;
use std::io::Write;

use crate::catalog;
use crate::error::{CashflowError, CashflowResult};
use crate::models::{Direction, Money};
use crate::storage::Storage;

/// Export all transactions to CSV, newest first
pub fn export_transactions_csv<W: Write + ?Sized>(
    storage: &Storage,
    writer: &mut W,
) -> CashflowResult<()> {
    writeln!(
        writer,
        "Date,Description,Type,Category,GST Code,Amount,Business,Notes"
    )
    .map_err(|e| CashflowError::Export(e.to_string()))?;

    for txn in storage.transactions.get_all()? {
        let label = catalog::category(txn.direction, &txn.category)
            .map(|c| c.label.to_string())
            .unwrap_or_else(|| txn.category.clone());

        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            txn.date,
            escape_csv(&txn.description),
            txn.direction,
            escape_csv(&label),
            escape_csv(txn.gst_code.label()),
            format_cents(txn.signed_amount()),
            if txn.is_business { "Business" } else { "Personal" },
            escape_csv(&txn.notes)
        )
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export the deduction schedule: deductible expenses grouped by category
/// with their GST components, plus a grand total row
pub fn export_deductions_csv<W: Write + ?Sized>(
    storage: &Storage,
    writer: &mut W,
) -> CashflowResult<()> {
    writeln!(writer, "Category,Transactions,Total,GST Component")
        .map_err(|e| CashflowError::Export(e.to_string()))?;

    // label -> (count, total, gst)
    let mut rows: HashMap<&'static str, (usize, Money, Money)> = HashMap::new();

    for txn in storage.transactions.get_all()? {
        if txn.direction != Direction::Expense {
            continue;
        }
        let Some(def) = catalog::category(Direction::Expense, &txn.category) else {
            continue;
        };
        if !def.deductible {
            continue;
        }

        let entry = rows.entry(def.label).or_insert((0, Money::zero(), Money::zero()));
        entry.0 += 1;
        entry.1 += txn.amount;
        entry.2 += txn.gst_code.component_of(txn.amount);
    }

    let mut sorted: Vec<_> = rows.into_iter().collect();
    sorted.sort_by(|a, b| b.1 .1.cmp(&a.1 .1).then(a.0.cmp(b.0)));

    let mut grand_total = Money::zero();
    let mut grand_gst = Money::zero();

    for (label, (count, total, gst)) in &sorted {
        writeln!(
            writer,
            "{},{},{},{}",
            escape_csv(label),
            count,
            format_cents(*total),
            format_cents(*gst)
        )
        .map_err(|e| CashflowError::Export(e.to_string()))?;
        grand_total += *total;
        grand_gst += *gst;
    }

    writeln!(
        writer,
        "TOTAL,,{},{}",
        format_cents(grand_total),
        format_cents(grand_gst)
    )
    .map_err(|e| CashflowError::Export(e.to_string()))?;

    Ok(())
}

/// Plain decimal for spreadsheets: no symbol, always two decimal places
fn format_cents(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, amount.dollars().abs(), amount.cents_part())
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

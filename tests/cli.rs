//! End-to-end CLI tests
//!
//! Drives the compiled binary against a temporary data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cashflow(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cashflow").unwrap();
    cmd.env("CASHFLOW_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn import_then_bas_report() {
    let data_dir = TempDir::new().unwrap();

    let csv_path = data_dir.path().join("statement.csv");
    std::fs::write(
        &csv_path,
        "Date,Description,Amount\n\
         2024-07-05,Officeworks Stationery,-67.00\n\
         2024-07-06,Client Invoice #1042,3300.00\n",
    )
    .unwrap();

    cashflow(&data_dir)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 transactions"));

    cashflow(&data_dir)
        .args(["report", "bas", "--quarter", "Q1 FY2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$3300.00"))
        .stdout(predicate::str::contains("$300.00"))
        .stdout(predicate::str::contains("$6.09"))
        .stdout(predicate::str::contains("$293.91"));
}

#[test]
fn manual_add_and_list() {
    let data_dir = TempDir::new().unwrap();

    cashflow(&data_dir)
        .args([
            "txn",
            "add",
            "-67.00",
            "Officeworks Stationery",
            "--date",
            "2024-07-05",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("office"));

    cashflow(&data_dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Officeworks Stationery"))
        .stdout(predicate::str::contains("-$67.00"));
}

#[test]
fn uncategorized_review_flow() {
    let data_dir = TempDir::new().unwrap();

    cashflow(&data_dir)
        .args(["txn", "add", "-12.00", "zzqx mystery purchase"])
        .assert()
        .success()
        .stdout(predicate::str::contains("personal_other"));

    cashflow(&data_dir)
        .args(["txn", "list", "--uncategorized"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zzqx mystery purchase"));
}

#[test]
fn categories_listing() {
    let data_dir = TempDir::new().unwrap();

    cashflow(&data_dir)
        .args(["categories", "--direction", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vehicle"))
        .stdout(predicate::str::contains("personal_other"));
}

#[test]
fn invoice_lifecycle() {
    let data_dir = TempDir::new().unwrap();

    cashflow(&data_dir)
        .args([
            "invoice",
            "add",
            "Acme Corp",
            "3300.00",
            "--description",
            "Web Design Package",
            "--date",
            "2024-07-03",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("INV-1001"))
        .stdout(predicate::str::contains("$3630.00"));

    cashflow(&data_dir)
        .args(["invoice", "status", "INV-1001", "paid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paid"));

    cashflow(&data_dir)
        .args(["invoice", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Corp"));
}

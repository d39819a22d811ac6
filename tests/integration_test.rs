use std::fs;
use std::path::Path;
use std::process::Command;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use rust_decimal::Decimal;
use tempfile::TempDir;

const ARTIFACTS: [&str; 10] = [
    "bank_statement.bai2",
    "bank_statements.json",
    "gl_journals.csv",
    "gl_journals.json",
    "ap_invoices.csv",
    "ap_invoices.json",
    "ar_invoices.csv",
    "ar_invoices.json",
    "external_transactions.csv",
    "external_transactions.json"
];

fn run_generator(output_dir: &Path, seed: u64) -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_ledgerforge");

    let output = Command::new(binary_path)
        .arg(output_dir)
        .arg(seed.to_string())
        .arg("error")
        .output()?;

    if !output.status.success() {
        return Err(anyhow!("generator failed: {}", String::from_utf8_lossy(&output.stderr)));
    }

    Ok(())
}

#[test]
fn test_cli_writes_the_full_artifact_set() -> Result<()> {
    let output_dir = TempDir::new()?;
    run_generator(output_dir.path(), 42)?;

    for artifact in ARTIFACTS {
        let path = output_dir.path().join(artifact);
        assert!(path.is_file(), "missing artifact {artifact}");
        assert!(fs::metadata(&path)?.len() > 0, "empty artifact {artifact}");
    }

    Ok(())
}

#[test]
fn test_bai2_artifact_is_well_framed() -> Result<()> {
    let output_dir = TempDir::new()?;
    run_generator(output_dir.path(), 42)?;

    let content = fs::read_to_string(output_dir.path().join("bank_statement.bai2"))?;
    let lines: Vec<&str> = content.lines().collect();

    assert!(lines.first().is_some_and(|line| line.starts_with("01,")));
    assert_eq!(lines.last(), Some(&"98,,,"));

    // 4 demo accounts, 10 transactions each.
    assert_eq!(lines.iter().filter(|line| line.starts_with("02,")).count(), 4);
    assert_eq!(lines.iter().filter(|line| line.starts_with("03,")).count(), 40);
    assert_eq!(lines.iter().filter(|line| line.starts_with("49,")).count(), 4);

    for detail in lines.iter().filter(|line| line.starts_with("03,")) {
        let fields: Vec<&str> = detail.split(',').collect();
        assert!(fields[2] == "165" || fields[2] == "475");

        let amount = Decimal::from_str(fields[3])?;
        assert!(amount >= Decimal::ZERO);
    }

    Ok(())
}

#[test]
fn test_journal_csv_debits_equal_credits() -> Result<()> {
    let output_dir = TempDir::new()?;
    run_generator(output_dir.path(), 42)?;

    let content = fs::read_to_string(output_dir.path().join("gl_journals.csv"))?;
    let mut reader = csv::Reader::from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let debit_index = headers.iter().position(|h| h == "DebitAmount").ok_or_else(|| anyhow!("missing DebitAmount"))?;
    let credit_index = headers.iter().position(|h| h == "CreditAmount").ok_or_else(|| anyhow!("missing CreditAmount"))?;

    let mut total_debit = Decimal::ZERO;
    let mut total_credit = Decimal::ZERO;
    let mut rows = 0;

    for record in reader.records() {
        let record = record?;
        total_debit += Decimal::from_str(&record[debit_index])?;
        total_credit += Decimal::from_str(&record[credit_index])?;
        rows += 1;
    }

    // 4 demo accounts x 2 journals x 3 lines.
    assert_eq!(rows, 24);
    assert_eq!(total_debit, total_credit);

    Ok(())
}

#[test]
fn test_same_seed_reproduces_identical_artifacts() -> Result<()> {
    let first_dir = TempDir::new()?;
    let second_dir = TempDir::new()?;

    run_generator(first_dir.path(), 7)?;
    run_generator(second_dir.path(), 7)?;

    // The BAI2 file header embeds the wall-clock minute, so compare the
    // purely seed-driven artifacts.
    for artifact in ["gl_journals.csv", "ap_invoices.csv", "ar_invoices.csv", "external_transactions.csv"] {
        let first = fs::read_to_string(first_dir.path().join(artifact))?;
        let second = fs::read_to_string(second_dir.path().join(artifact))?;

        assert_eq!(first, second, "artifact {artifact} differs between runs");
    }

    Ok(())
}

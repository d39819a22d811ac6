use super::{cash_to_csv, invoices_to_csv, journals_to_csv, render_bai2, to_json_payload};

use std::str::FromStr;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::generators::{CashGenerator, InvoiceGenerator, JournalGenerator, StatementGenerator};
use crate::models::{BankAccount, BankStatement, Currency, InvoiceKind};
use crate::types::StdRandom;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date")
}

fn created_at() -> NaiveDateTime {
    base_date().and_hms_opt(9, 30, 0).expect("valid time")
}

fn sample_statements() -> Result<Vec<BankStatement>> {
    let generator = StatementGenerator {
        transactions_per_account: 5,
        min_magnitude: Decimal::from(100),
        max_magnitude: Decimal::from(30_000),
        start_date: base_date()
    };

    let accounts = [
        BankAccount::new("Operating Account", "4401-2207-0663", Currency::Usd, Decimal::from(50_000))
            .with_target(Decimal::from(75_000)),
        BankAccount::new("Payroll Account", "8802-4413-9917", Currency::Gbp, Decimal::from(20_000))
            .with_target(Decimal::from(12_000))
    ];

    let mut rng = StdRandom::seeded(77);
    let mut statements = Vec::new();
    for account in &accounts {
        statements.push(generator.generate(account, &mut rng)?);
    }

    Ok(statements)
}

#[test]
fn test_bai2_file_framing() -> Result<()> {
    let statements = sample_statements()?;

    let rendered = render_bai2(&statements, created_at());
    let lines: Vec<&str> = rendered.lines().collect();

    assert!(lines.first().is_some_and(|line| line.starts_with("01,030125,,0930,,1,030125,,")));
    assert_eq!(lines.last(), Some(&"98,,,"));

    let account_headers = lines.iter().filter(|line| line.starts_with("02,")).count();
    let details = lines.iter().filter(|line| line.starts_with("03,")).count();
    let trailers = lines.iter().filter(|line| line.starts_with("49,")).count();

    assert_eq!(account_headers, 2);
    assert_eq!(details, 10);
    assert_eq!(trailers, 2);

    Ok(())
}

#[test]
fn test_bai2_trailer_carries_achieved_balances() -> Result<()> {
    let statements = sample_statements()?;

    let rendered = render_bai2(&statements, created_at());

    let first_trailer = rendered
        .lines()
        .find(|line| line.starts_with("49,"))
        .ok_or_else(|| anyhow::anyhow!("missing account trailer"))?;

    assert_eq!(
        first_trailer,
        format!("49,{:.2},{:.2},,", statements[0].opening_balance, statements[0].closing_balance)
    );

    Ok(())
}

#[test]
fn test_bai2_details_use_credit_and_debit_codes() -> Result<()> {
    let statements = sample_statements()?;

    let rendered = render_bai2(&statements, created_at());

    for line in rendered.lines().filter(|line| line.starts_with("03,")) {
        let fields: Vec<&str> = line.split(',').collect();
        assert!(fields[2] == "165" || fields[2] == "475");
        let _: Decimal = Decimal::from_str(fields[3])?;
    }

    Ok(())
}

#[test]
fn test_journal_csv_rows_balance_in_aggregate() -> Result<()> {
    let generator = JournalGenerator {
        journals_per_account: 2,
        lines_per_journal: 3,
        min_magnitude: Decimal::from(1_000),
        max_magnitude: Decimal::from(10_000),
        base_date: base_date(),
        date_range_days: 30
    };

    let account = BankAccount::new("Operating Account", "4401", Currency::Usd, Decimal::from(50_000));
    let mut rng = StdRandom::seeded(5);
    let journals = generator.generate_for_account(&account, &mut rng)?;

    let content = journals_to_csv(&journals)?;

    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers = reader.headers()?.clone();

    let debit_index = headers.iter().position(|h| h == "DebitAmount").ok_or_else(|| anyhow::anyhow!("missing DebitAmount"))?;
    let credit_index = headers.iter().position(|h| h == "CreditAmount").ok_or_else(|| anyhow::anyhow!("missing CreditAmount"))?;

    let mut total_debit = Decimal::ZERO;
    let mut total_credit = Decimal::ZERO;
    let mut rows = 0;

    for record in reader.records() {
        let record = record?;
        total_debit += Decimal::from_str(&record[debit_index])?;
        total_credit += Decimal::from_str(&record[credit_index])?;
        rows += 1;
    }

    assert_eq!(rows, 6);
    assert_eq!(total_debit, total_credit);

    Ok(())
}

#[test]
fn test_invoice_csv_emits_one_row_per_line() -> Result<()> {
    let generator = InvoiceGenerator {
        invoices_per_account: 3,
        min_total: Decimal::from(100),
        max_total: Decimal::from(5_000),
        base_date: base_date(),
        date_range_days: 30
    };

    let account = BankAccount::new("Operating Account", "4401", Currency::Usd, Decimal::from(50_000));
    let mut rng = StdRandom::seeded(8);
    let invoices = generator.generate_for_account(InvoiceKind::Payable, &account, &mut rng)?;

    let content = invoices_to_csv(&invoices)?;
    let expected_rows: usize = invoices.iter().map(|invoice| invoice.lines.len()).sum();

    let mut reader = csv::Reader::from_reader(content.as_bytes());
    assert!(reader.headers()?.iter().any(|h| h == "InvoiceNumber"));
    assert_eq!(reader.records().count(), expected_rows);

    Ok(())
}

#[test]
fn test_cash_csv_flags_reconciliation_as_y_or_n() -> Result<()> {
    let generator = CashGenerator {
        transactions_per_account: 12,
        base_date: base_date(),
        date_range_days: 30,
        credit_probability: 0.7,
        reconciled_probability: 0.7
    };

    let account = BankAccount::new("Treasury Account", "5500", Currency::Eur, Decimal::from(10_000));
    let mut rng = StdRandom::seeded(21);
    let transactions = generator.generate_for_account(&account, &mut rng)?;

    let content = cash_to_csv(&transactions)?;

    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers = reader.headers()?.clone();
    let reconciled_index = headers.iter().position(|h| h == "Reconciled").ok_or_else(|| anyhow::anyhow!("missing Reconciled"))?;

    let mut rows = 0;
    for record in reader.records() {
        let record = record?;
        assert!(record[reconciled_index] == *"Y" || record[reconciled_index] == *"N");
        rows += 1;
    }

    assert_eq!(rows, 12);

    Ok(())
}

#[test]
fn test_json_payload_uses_camel_case_keys() -> Result<()> {
    let statements = sample_statements()?;

    let payload = to_json_payload(&statements)?;

    assert!(payload.contains("\"runningBalance\""));
    assert!(payload.contains("\"openingBalance\""));
    assert!(payload.contains("\"targetClosingBalance\""));

    Ok(())
}

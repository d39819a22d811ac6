mod alloc;
mod export;
mod generators;
mod models;
mod types;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use chrono::{Days, Local, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use crate::export::{cash_to_csv, invoices_to_csv, journals_to_csv, render_bai2, to_json_payload};
use crate::generators::{CashGenerator, InvoiceGenerator, JournalGenerator, StatementGenerator};
use crate::models::{BankAccount, BankStatement, Currency, ExternalTransaction, GlJournal, Invoice, InvoiceKind};
use crate::types::StdRandom;

struct GeneratorConfig {
    output_dir: PathBuf,
    seed: Option<u64>,
    log_level: LevelFilter
}

impl GeneratorConfig {
    //NOTE: If this grew more flags I would reach for the clap crate; for a
    //      three-argument tool, positional parsing keeps things simple.
    fn from_args() -> Option<Self> {
        let args: Vec<String> = env::args().collect();
        let output_dir = PathBuf::from(args.get(1)?);
        let seed = args.get(2).and_then(|s| s.parse().ok());
        let log_level = args.get(3)
            .map(|s| parse_log_level(s))
            .unwrap_or(LevelFilter::INFO);

        Some(Self { output_dir, seed, log_level })
    }
}

fn main() -> Result<()> {
    let Some(config) = GeneratorConfig::from_args() else {
        eprintln!("Usage: ledgerforge [output_dir] [seed:optional] [log_level:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: info)");
        exit(1);
    };

    setup_logging(config.log_level);

    let mut rng = match config.seed {
        Some(seed) => {
            info!("Using seed [{seed}] for reproducible output");
            StdRandom::seeded(seed)
        }
        None => StdRandom::from_entropy()
    };

    fs::create_dir_all(&config.output_dir)?;

    let timer = Instant::now();
    write_artifacts(&config.output_dir, Local::now().naive_local(), &mut rng)?;
    let duration = timer.elapsed();

    info!("Generated demo artifacts in: {duration:?}");

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

/// The demo account portfolio every artifact set is generated for.
fn demo_portfolio() -> Vec<BankAccount> {
    vec![
        BankAccount::new("Operating Account", "4401-2207-0663", Currency::Usd, Decimal::from(50_000))
            .with_target(Decimal::from(75_000)),
        BankAccount::new("Payroll Account", "8802-4413-9917", Currency::Usd, Decimal::from(120_000))
            .with_target(Decimal::from(85_000)),
        BankAccount::new("Receivables Account", "3300-1185-0241", Currency::Eur, Decimal::from(30_000))
            .with_target(Decimal::from(42_000)),
        BankAccount::new("Treasury Account", "7706-9928-1175", Currency::Gbp, Decimal::from(25_000))
    ]
}

fn write_artifacts(output_dir: &Path, now: NaiveDateTime, rng: &mut StdRandom) -> Result<()> {
    let accounts = demo_portfolio();
    let today = now.date();
    let statement_start = today.checked_sub_days(Days::new(30)).unwrap_or(today);

    let statement_generator = StatementGenerator {
        transactions_per_account: 10,
        min_magnitude: Decimal::from(100),
        max_magnitude: Decimal::from(5_000),
        start_date: statement_start
    };

    let journal_generator = JournalGenerator {
        journals_per_account: 2,
        lines_per_journal: 3,
        min_magnitude: Decimal::from(1_000),
        max_magnitude: Decimal::from(10_000),
        base_date: today,
        date_range_days: 30
    };

    let invoice_generator = InvoiceGenerator {
        invoices_per_account: 3,
        min_total: Decimal::from(100),
        max_total: Decimal::from(5_000),
        base_date: today,
        date_range_days: 30
    };

    let cash_generator = CashGenerator {
        transactions_per_account: 5,
        base_date: today,
        date_range_days: 30,
        credit_probability: 0.7,
        reconciled_probability: 0.7
    };

    let mut statements: Vec<BankStatement> = Vec::new();
    let mut journals: Vec<GlJournal> = Vec::new();
    let mut ap_invoices: Vec<Invoice> = Vec::new();
    let mut ar_invoices: Vec<Invoice> = Vec::new();
    let mut cash_transactions: Vec<ExternalTransaction> = Vec::new();

    for account in &accounts {
        statements.push(statement_generator.generate(account, rng)?);
        journals.extend(journal_generator.generate_for_account(account, rng)?);
        ap_invoices.extend(invoice_generator.generate_for_account(InvoiceKind::Payable, account, rng)?);
        ar_invoices.extend(invoice_generator.generate_for_account(InvoiceKind::Receivable, account, rng)?);
        cash_transactions.extend(cash_generator.generate_for_account(account, rng)?);
    }

    let transaction_count: usize = statements.iter().map(|s| s.transactions.len()).sum();

    write_file(output_dir, "bank_statement.bai2", &render_bai2(&statements, now), transaction_count)?;
    write_file(output_dir, "bank_statements.json", &to_json_payload(&statements)?, statements.len())?;
    write_file(output_dir, "gl_journals.csv", &journals_to_csv(&journals)?, journals.len())?;
    write_file(output_dir, "gl_journals.json", &to_json_payload(&journals)?, journals.len())?;
    write_file(output_dir, "ap_invoices.csv", &invoices_to_csv(&ap_invoices)?, ap_invoices.len())?;
    write_file(output_dir, "ap_invoices.json", &to_json_payload(&ap_invoices)?, ap_invoices.len())?;
    write_file(output_dir, "ar_invoices.csv", &invoices_to_csv(&ar_invoices)?, ar_invoices.len())?;
    write_file(output_dir, "ar_invoices.json", &to_json_payload(&ar_invoices)?, ar_invoices.len())?;
    write_file(output_dir, "external_transactions.csv", &cash_to_csv(&cash_transactions)?, cash_transactions.len())?;
    write_file(output_dir, "external_transactions.json", &to_json_payload(&cash_transactions)?, cash_transactions.len())?;

    Ok(())
}

fn write_file(output_dir: &Path, name: &str, content: &str, records: usize) -> Result<()> {
    let path = output_dir.join(name);
    fs::write(&path, content)?;

    info!("Wrote [{}] with [{records}] records", path.display());

    Ok(())
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::alloc::LineSide;
use crate::export::ExportError;
use crate::models::{CashTransactionKind, Currency, ExternalTransaction, GlAccountKind, GlJournal, Invoice, InvoiceKind, JournalCategory, JournalSource, JournalType};

/// Flat import row for one journal line; header columns repeat per row.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct JournalRow<'a> {
    journal_id: &'a str,
    journal_name: &'a str,
    journal_date: NaiveDate,
    journal_type: JournalType,
    business_unit: &'a str,
    ledger: &'a str,
    currency: Currency,
    journal_source: JournalSource,
    journal_category: JournalCategory,
    period_name: &'a str,
    status: &'a str,
    total_debit: Decimal,
    total_credit: Decimal,
    line_number: usize,
    account_type: GlAccountKind,
    gl_account: &'a str,
    line_description: &'a str,
    debit_amount: Decimal,
    credit_amount: Decimal,
    line_type: LineSide
}

/// Flat import row for one invoice line.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct InvoiceRow<'a> {
    invoice_number: &'a str,
    invoice_kind: InvoiceKind,
    party_name: &'a str,
    invoice_date: NaiveDate,
    due_date: NaiveDate,
    currency: Currency,
    invoice_amount: Decimal,
    payment_terms: &'a str,
    status: &'a str,
    line_number: usize,
    line_description: &'a str,
    quantity: i64,
    unit_price: Decimal,
    amount: Decimal,
    distribution_account: &'a str
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CashRow<'a> {
    bank_account_name: &'a str,
    amount: Decimal,
    transaction_date: NaiveDate,
    transaction_type: CashTransactionKind,
    reference: &'a str,
    business_unit: &'a str,
    currency: Currency,
    reconciled: &'a str
}

pub fn journals_to_csv(journals: &[GlJournal]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();

    {
        let mut writer = csv::Writer::from_writer(&mut buffer);

        for journal in journals {
            for line in &journal.lines {
                writer.serialize(JournalRow {
                    journal_id: &journal.journal_id,
                    journal_name: &journal.journal_name,
                    journal_date: journal.journal_date,
                    journal_type: journal.journal_type,
                    business_unit: &journal.business_unit,
                    ledger: &journal.ledger,
                    currency: journal.currency,
                    journal_source: journal.source,
                    journal_category: journal.category,
                    period_name: &journal.period_name,
                    status: &journal.status,
                    total_debit: journal.total_debit,
                    total_credit: journal.total_credit,
                    line_number: line.line_number,
                    account_type: line.account_kind,
                    gl_account: &line.gl_account,
                    line_description: &line.description,
                    debit_amount: line.debit_amount,
                    credit_amount: line.credit_amount,
                    line_type: line.side
                })?;
            }
        }

        writer.flush()?;
    }

    Ok(String::from_utf8(buffer)?)
}

pub fn invoices_to_csv(invoices: &[Invoice]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();

    {
        let mut writer = csv::Writer::from_writer(&mut buffer);

        for invoice in invoices {
            for line in &invoice.lines {
                writer.serialize(InvoiceRow {
                    invoice_number: &invoice.invoice_number,
                    invoice_kind: invoice.kind,
                    party_name: &invoice.party_name,
                    invoice_date: invoice.invoice_date,
                    due_date: invoice.due_date,
                    currency: invoice.currency,
                    invoice_amount: invoice.amount,
                    payment_terms: &invoice.payment_terms,
                    status: &invoice.status,
                    line_number: line.line_number,
                    line_description: &line.description,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    amount: line.amount,
                    distribution_account: &line.distribution_account
                })?;
            }
        }

        writer.flush()?;
    }

    Ok(String::from_utf8(buffer)?)
}

pub fn cash_to_csv(transactions: &[ExternalTransaction]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();

    {
        let mut writer = csv::Writer::from_writer(&mut buffer);

        for transaction in transactions {
            writer.serialize(CashRow {
                bank_account_name: &transaction.bank_account_name,
                amount: transaction.amount,
                transaction_date: transaction.date,
                transaction_type: transaction.kind,
                reference: &transaction.reference,
                business_unit: &transaction.business_unit,
                currency: transaction.currency,
                reconciled: if transaction.reconciled { "Y" } else { "N" }
            })?;
        }

        writer.flush()?;
    }

    Ok(String::from_utf8(buffer)?)
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Currency;

/// Whether an invoice is payable (supplier-facing) or receivable
/// (customer-facing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceKind {
    Payable,
    Receivable
}

impl InvoiceKind {
    /// Ledger-side label: "AP" for payables, "AR" for receivables.
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceKind::Payable => "AP",
            InvoiceKind::Receivable => "AR"
        }
    }

    pub fn number_prefix(&self) -> &'static str {
        match self {
            InvoiceKind::Payable => "INV",
            InvoiceKind::Receivable => "AR-INV"
        }
    }
}

/// One invoice line. Line amounts sum exactly to the invoice total; the
/// last line carries the remainder of the split.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub line_number: usize,
    pub description: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub amount: Decimal,
    pub distribution_account: String
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub kind: InvoiceKind,
    pub invoice_number: String,
    /// Supplier name for payables, customer name for receivables.
    pub party_name: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub currency: Currency,
    pub amount: Decimal,
    pub payment_terms: String,
    pub status: String,
    pub description: String,
    pub lines: Vec<InvoiceLine>
}

impl Invoice {
    pub fn lines_total(&self) -> Decimal {
        self.lines.iter().map(|line| line.amount).sum()
    }
}

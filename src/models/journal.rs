use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::alloc::{BalancedLine, LineSide};
use crate::models::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JournalType {
    Standard,
    Adjustment,
    Reclassification,
    Reversal
}

impl JournalType {
    pub const ALL: [JournalType; 4] = [
        JournalType::Standard,
        JournalType::Adjustment,
        JournalType::Reclassification,
        JournalType::Reversal
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JournalSource {
    Manual,
    Ap,
    Ar,
    Cash,
    Inventory,
    Payroll
}

impl JournalSource {
    pub const ALL: [JournalSource; 6] = [
        JournalSource::Manual,
        JournalSource::Ap,
        JournalSource::Ar,
        JournalSource::Cash,
        JournalSource::Inventory,
        JournalSource::Payroll
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JournalCategory {
    General,
    Adjustment,
    Reclassification,
    Reversal
}

impl JournalCategory {
    pub const ALL: [JournalCategory; 4] = [
        JournalCategory::General,
        JournalCategory::Adjustment,
        JournalCategory::Reclassification,
        JournalCategory::Reversal
    ];
}

/// High-level GL account kind, keyed into the demo chart of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GlAccountKind {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense
}

impl GlAccountKind {
    pub const ALL: [GlAccountKind; 5] = [
        GlAccountKind::Asset,
        GlAccountKind::Liability,
        GlAccountKind::Equity,
        GlAccountKind::Revenue,
        GlAccountKind::Expense
    ];

    /// Demo GL account codes for this kind.
    pub fn account_codes(&self) -> &'static [&'static str] {
        match self {
            GlAccountKind::Asset => &["1000", "1100", "1200", "1300", "1400", "1500"],
            GlAccountKind::Liability => &["2000", "2100", "2200", "2300", "2400"],
            GlAccountKind::Equity => &["3000", "3100", "3200", "3300"],
            GlAccountKind::Revenue => &["4000", "4100", "4200", "4300", "4400"],
            GlAccountKind::Expense => &["5000", "5100", "5200", "5300", "5400", "5500"]
        }
    }
}

/// One journal entry line, decorated around a balanced amount.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlJournalLine {
    /// Position within the entry, starting at 1.
    pub line_number: usize,
    pub account_kind: GlAccountKind,
    pub gl_account: String,
    pub description: String,
    pub side: LineSide,
    pub debit_amount: Decimal,
    pub credit_amount: Decimal
}

impl GlJournalLine {
    /// Builds a line from a balanced amount; the debit/credit columns are
    /// projections of the tagged side, so at most one is non-zero.
    pub fn from_balanced(line_number: usize, account_kind: GlAccountKind, gl_account: &str, description: String, balanced: BalancedLine) -> Self {
        Self {
            line_number,
            account_kind,
            gl_account: gl_account.to_string(),
            description,
            side: balanced.side,
            debit_amount: balanced.debit_amount(),
            credit_amount: balanced.credit_amount()
        }
    }
}

/// A GL journal entry with balanced lines.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlJournal {
    pub journal_id: String,
    pub journal_name: String,
    pub journal_date: NaiveDate,
    pub journal_type: JournalType,
    pub business_unit: String,
    pub ledger: String,
    pub currency: Currency,
    pub source: JournalSource,
    pub category: JournalCategory,
    pub period_name: String,
    pub status: String,
    pub description: String,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub lines: Vec<GlJournalLine>
}

impl GlJournal {
    pub fn is_balanced(&self) -> bool {
        self.total_debit == self.total_credit
    }
}

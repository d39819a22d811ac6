use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::BankAccount;

/// Direction of a statement transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Credit,
    Debit
}

impl TransactionKind {
    /// BAI2 transaction type code (165 = credit, 475 = debit).
    pub fn bai2_code(&self) -> &'static str {
        match self {
            TransactionKind::Credit => "165",
            TransactionKind::Debit => "475"
        }
    }
}

/// One decorated bank statement transaction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementTransaction {
    /// Position within the account's sequence, starting at 1.
    pub sequence: usize,
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    /// Balance after applying every transaction up to and including this one.
    pub running_balance: Decimal
}

/// A complete statement for one account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankStatement {
    pub account: BankAccount,
    pub opening_balance: Decimal,
    /// The balance actually reached, which may fall short of the account's
    /// target when the amount bounds were too tight.
    pub closing_balance: Decimal,
    pub transactions: Vec<StatementTransaction>
}

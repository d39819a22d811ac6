use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Currency;

/// External cash management transaction types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CashTransactionKind {
    Chk,
    Eft,
    Msc,
    Wir,
    Ach
}

impl CashTransactionKind {
    pub const ALL: [CashTransactionKind; 5] = [
        CashTransactionKind::Chk,
        CashTransactionKind::Eft,
        CashTransactionKind::Msc,
        CashTransactionKind::Wir,
        CashTransactionKind::Ach
    ];
}

/// An external cash transaction awaiting reconciliation against a bank
/// statement line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalTransaction {
    pub bank_account_name: String,
    /// Signed amount: positive for credits, negative for debits.
    pub amount: Decimal,
    pub currency: Currency,
    pub date: NaiveDate,
    pub kind: CashTransactionKind,
    pub reference: String,
    pub business_unit: String,
    pub reconciled: bool
}

impl ExternalTransaction {
    pub fn is_credit(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

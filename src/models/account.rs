use std::fmt;
use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::Serialize;

/// Currencies recognized by the demo generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Cad,
    Eur,
    Gbp
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Cad => "CAD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP"
        }
    }

    /// Plausible magnitude range for a single cash transaction, in whole
    /// currency units.
    pub fn cash_amount_bounds(&self) -> (i64, i64) {
        match self {
            Currency::Usd => (100, 10_000),
            Currency::Cad => (150, 15_000),
            Currency::Eur => (80, 8_000),
            Currency::Gbp => (70, 7_000)
        }
    }
}

impl Display for Currency {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}

/// Demo bank account descriptor supplied to every generator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub name: String,
    pub number: String,
    pub currency: Currency,
    pub opening_balance: Decimal,
    /// Balance the statement should land on.
    pub target_closing_balance: Decimal
}

impl BankAccount {
    /// Creates an account whose target closing balance defaults to the
    /// opening balance.
    pub fn new(name: &str, number: &str, currency: Currency, opening_balance: Decimal) -> Self {
        Self {
            name: name.to_string(),
            number: number.to_string(),
            currency,
            opening_balance,
            target_closing_balance: opening_balance
        }
    }

    pub fn with_target(mut self, target_closing_balance: Decimal) -> Self {
        self.target_closing_balance = target_closing_balance;
        self
    }

    /// Short prefix used in generated identifiers, e.g. "OPE" for
    /// "Operating Account".
    pub fn reference_prefix(&self) -> String {
        self.name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .take(3)
            .collect::<String>()
            .to_uppercase()
    }
}

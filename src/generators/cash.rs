use chrono::{Days, NaiveDate};

use crate::generators::{BUSINESS_UNITS, GeneratorError};
use crate::models::{BankAccount, CashTransactionKind, ExternalTransaction};
use crate::types::{RandomSource, from_cents};

/// Generates external cash transactions for reconciliation testing.
pub struct CashGenerator {
    pub transactions_per_account: usize,
    /// Transaction dates fall within `date_range_days` days before this date.
    pub base_date: NaiveDate,
    pub date_range_days: i64,
    /// Share of transactions that are credits (positive amounts).
    pub credit_probability: f64,
    /// Share of transactions flagged as already reconciled.
    pub reconciled_probability: f64
}

impl CashGenerator {
    pub fn generate_for_account(&self, account: &BankAccount, rng: &mut impl RandomSource) -> Result<Vec<ExternalTransaction>, GeneratorError> {
        let (lo_units, hi_units) = account.currency.cash_amount_bounds();
        let mut transactions = Vec::with_capacity(self.transactions_per_account);

        for index in 0..self.transactions_per_account {
            let offset = rng.int_between(0, self.date_range_days);
            let date = self.base_date
                .checked_sub_days(Days::new(offset as u64))
                .ok_or(GeneratorError::DateOutOfRange { days: offset })?;

            let magnitude = from_cents(rng.cents_between(lo_units * 100, hi_units * 100));
            let amount = if rng.chance(self.credit_probability) { magnitude } else { -magnitude };

            let suffix = (b'A' + (index % 26) as u8) as char;

            transactions.push(ExternalTransaction {
                bank_account_name: account.name.clone(),
                amount,
                currency: account.currency,
                date,
                kind: *rng.pick(&CashTransactionKind::ALL),
                reference: format!("EXT-{}-{:02}{}", account.reference_prefix(), index + 1, suffix),
                business_unit: rng.pick(&BUSINESS_UNITS).to_string(),
                reconciled: rng.chance(self.reconciled_probability)
            });
        }

        Ok(transactions)
    }
}

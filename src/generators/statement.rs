use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use tracing::warn;

use crate::alloc::{BalanceRequest, allocate_balance};
use crate::generators::GeneratorError;
use crate::models::{BankAccount, BankStatement, StatementTransaction, TransactionKind};
use crate::types::RandomSource;

const DESCRIPTIONS: [&str; 12] = [
    "ACH Credit",
    "Wire Transfer",
    "Check Payment",
    "Direct Deposit",
    "ATM Withdrawal",
    "Online Payment",
    "Service Charge",
    "Interest Earned",
    "Fee Charged",
    "Electronic Transfer",
    "Cash Deposit",
    "Check Deposit"
];

/// Decorates balanced amount sequences into full bank statements.
pub struct StatementGenerator {
    pub transactions_per_account: usize,
    pub min_magnitude: Decimal,
    pub max_magnitude: Decimal,
    /// Date of the first transaction; subsequent transactions land on
    /// consecutive days.
    pub start_date: NaiveDate
}

impl StatementGenerator {
    pub fn generate(&self, account: &BankAccount, rng: &mut impl RandomSource) -> Result<BankStatement, GeneratorError> {
        let request = BalanceRequest {
            opening_balance: account.opening_balance,
            target_closing_balance: account.target_closing_balance,
            count: self.transactions_per_account,
            min_magnitude: self.min_magnitude,
            max_magnitude: self.max_magnitude
        };

        let allocation = allocate_balance(&request, rng)?;

        if !allocation.converged() {
            warn!(
                "Statement for account [{}] missed its target closing balance by [{}]",
                account.name,
                allocation.shortfall()
            );
        }

        let mut running = account.opening_balance;
        let mut transactions = Vec::with_capacity(allocation.amounts.len());

        for (index, item) in allocation.amounts.iter().enumerate() {
            running += item.signed();

            let date = self.start_date
                .checked_add_days(Days::new(index as u64))
                .ok_or(GeneratorError::DateOutOfRange { days: index as i64 })?;

            let kind = if item.is_credit { TransactionKind::Credit } else { TransactionKind::Debit };

            transactions.push(StatementTransaction {
                sequence: index + 1,
                date,
                kind,
                amount: item.magnitude,
                description: format!("{} {:03}", rng.pick(&DESCRIPTIONS), index + 1),
                running_balance: running
            });
        }

        Ok(BankStatement {
            account: account.clone(),
            opening_balance: account.opening_balance,
            closing_balance: allocation.closing_balance,
            transactions
        })
    }
}

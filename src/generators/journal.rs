use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::alloc::{JournalRequest, balance_lines};
use crate::generators::{BUSINESS_UNITS, GeneratorError};
use crate::models::{BankAccount, GlAccountKind, GlJournal, GlJournalLine, JournalCategory, JournalSource, JournalType};
use crate::types::RandomSource;

const LEDGERS: [&str; 3] = ["US Primary Ledger", "UK Primary Ledger", "CA Primary Ledger"];

const PERIOD_NAMES: [&str; 6] = ["JAN-2025", "FEB-2025", "MAR-2025", "APR-2025", "MAY-2025", "JUN-2025"];

/// Decorates balanced line sets into full GL journal entries.
pub struct JournalGenerator {
    pub journals_per_account: usize,
    pub lines_per_journal: usize,
    pub min_magnitude: Decimal,
    pub max_magnitude: Decimal,
    /// Journal dates fall within `date_range_days` days before this date.
    pub base_date: NaiveDate,
    pub date_range_days: i64
}

impl JournalGenerator {
    pub fn generate_for_account(&self, account: &BankAccount, rng: &mut impl RandomSource) -> Result<Vec<GlJournal>, GeneratorError> {
        let mut journals = Vec::with_capacity(self.journals_per_account);

        for sequence in 1..=self.journals_per_account {
            journals.push(self.generate_journal(account, sequence, rng)?);
        }

        Ok(journals)
    }

    fn generate_journal(&self, account: &BankAccount, sequence: usize, rng: &mut impl RandomSource) -> Result<GlJournal, GeneratorError> {
        let offset = rng.int_between(1, self.date_range_days);
        let journal_date = self.base_date
            .checked_sub_days(Days::new(offset as u64))
            .ok_or(GeneratorError::DateOutOfRange { days: offset })?;

        let request = JournalRequest {
            line_count: self.lines_per_journal,
            min_magnitude: self.min_magnitude,
            max_magnitude: self.max_magnitude
        };

        let balanced = balance_lines(&request, rng)?;

        let mut total_debit = Decimal::ZERO;
        let mut total_credit = Decimal::ZERO;
        let mut lines = Vec::with_capacity(balanced.len());

        for (index, amount) in balanced.into_iter().enumerate() {
            total_debit += amount.debit_amount();
            total_credit += amount.credit_amount();

            let account_kind = *rng.pick(&GlAccountKind::ALL);
            let gl_account = *rng.pick(account_kind.account_codes());

            lines.push(GlJournalLine::from_balanced(
                index + 1,
                account_kind,
                gl_account,
                format!("Demo GL line {}", index + 1),
                amount
            ));
        }

        Ok(GlJournal {
            journal_id: format!("GL-{}-{:03}", account.reference_prefix(), sequence),
            journal_name: format!("Demo GL Journal {} for {}", sequence, account.name),
            journal_date,
            journal_type: *rng.pick(&JournalType::ALL),
            business_unit: rng.pick(&BUSINESS_UNITS).to_string(),
            ledger: rng.pick(&LEDGERS).to_string(),
            currency: account.currency,
            source: *rng.pick(&JournalSource::ALL),
            category: *rng.pick(&JournalCategory::ALL),
            period_name: rng.pick(&PERIOD_NAMES).to_string(),
            status: "DRAFT".to_string(),
            description: format!("Demo GL journal entry for {}", account.name),
            total_debit,
            total_credit,
            lines
        })
    }
}

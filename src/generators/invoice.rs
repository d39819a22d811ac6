use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::alloc::validate_bounds;
use crate::generators::GeneratorError;
use crate::models::{BankAccount, Invoice, InvoiceKind, InvoiceLine};
use crate::types::{RandomSource, from_cents, round_amount};

const SUPPLIERS: [&str; 6] = [
    "ABC Supplies Inc.",
    "XYZ Corporation",
    "Global Services Ltd.",
    "Tech Solutions Co.",
    "Office Equipment Corp.",
    "Marketing Partners LLC"
];

const CUSTOMERS: [&str; 6] = [
    "Acme Corporation",
    "Beta Industries",
    "Gamma Solutions",
    "Delta Technologies",
    "Epsilon Services",
    "Zeta Enterprises"
];

const EXPENSE_CATEGORIES: [&str; 10] = [
    "Equipment Expense (Full)",
    "Office Supplies",
    "Travel & Entertainment",
    "Professional Services",
    "Marketing Expenses",
    "IT Services",
    "Utilities",
    "Rent",
    "Insurance",
    "Maintenance"
];

const MIN_LINE_CENTS: i64 = 1_000;

/// Generates AP or AR invoices whose line amounts split the invoice total
/// exactly, the last line carrying the remainder.
pub struct InvoiceGenerator {
    pub invoices_per_account: usize,
    pub min_total: Decimal,
    pub max_total: Decimal,
    /// Invoice dates fall within `date_range_days` days before this date.
    pub base_date: NaiveDate,
    pub date_range_days: i64
}

impl InvoiceGenerator {
    pub fn generate_for_account(&self, kind: InvoiceKind, account: &BankAccount, rng: &mut impl RandomSource) -> Result<Vec<Invoice>, GeneratorError> {
        let mut invoices = Vec::with_capacity(self.invoices_per_account);

        for sequence in 1..=self.invoices_per_account {
            invoices.push(self.generate_invoice(kind, account, sequence, rng)?);
        }

        Ok(invoices)
    }

    fn generate_invoice(&self, kind: InvoiceKind, account: &BankAccount, sequence: usize, rng: &mut impl RandomSource) -> Result<Invoice, GeneratorError> {
        let (min_cents, max_cents) = validate_bounds(self.min_total, self.max_total)?;

        let offset = rng.int_between(0, self.date_range_days);
        let invoice_date = self.base_date
            .checked_sub_days(Days::new(offset as u64))
            .ok_or(GeneratorError::DateOutOfRange { days: offset })?;

        let due_offset = rng.int_between(15, 45);
        let due_date = invoice_date
            .checked_add_days(Days::new(due_offset as u64))
            .ok_or(GeneratorError::DateOutOfRange { days: due_offset })?;

        let total_cents = rng.cents_between(min_cents, max_cents);
        let line_count = rng.int_between(1, 5) as usize;
        let lines = self.split_lines(kind, total_cents, line_count, rng);

        let party_name = match kind {
            InvoiceKind::Payable => *rng.pick(&SUPPLIERS),
            InvoiceKind::Receivable => *rng.pick(&CUSTOMERS)
        };

        Ok(Invoice {
            kind,
            invoice_number: format!("{}-{}-{:03}", kind.number_prefix(), account.reference_prefix(), sequence),
            party_name: party_name.to_string(),
            invoice_date,
            due_date,
            currency: account.currency,
            amount: from_cents(total_cents),
            payment_terms: "NET30".to_string(),
            status: "PENDING".to_string(),
            description: format!("Demo {} invoice {} for {}", kind.label(), sequence, account.name),
            lines
        })
    }

    /// Splits the invoice total across `line_count` lines. All but the last
    /// line are random draws bounded by an even share of what is left; the
    /// last line is the exact remainder.
    fn split_lines(&self, kind: InvoiceKind, total_cents: i64, line_count: usize, rng: &mut impl RandomSource) -> Vec<InvoiceLine> {
        let mut lines = Vec::with_capacity(line_count);
        let mut remaining = total_cents;

        for index in 0..line_count {
            let cents = if index == line_count - 1 {
                remaining
            } else {
                let share_ceiling = remaining / (line_count - index) as i64;
                rng.cents_between(MIN_LINE_CENTS.min(share_ceiling), share_ceiling).min(remaining)
            };
            remaining -= cents;

            let amount = from_cents(cents);
            let quantity = rng.int_between(1, 10);

            lines.push(InvoiceLine {
                line_number: index + 1,
                description: rng.pick(&EXPENSE_CATEGORIES).to_string(),
                quantity,
                unit_price: round_amount(amount / Decimal::from(quantity)),
                amount,
                distribution_account: format!("{}{}", kind.label(), rng.int_between(1_000, 9_999))
            });
        }

        lines
    }
}

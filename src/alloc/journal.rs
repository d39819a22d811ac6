use rust_decimal::Decimal;
use serde::Serialize;

use crate::alloc::AllocationError;
use crate::alloc::balance::validate_bounds;
use crate::types::{RandomSource, from_cents};

/// Which side of a journal entry a line posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LineSide {
    Debit,
    Credit
}

/// One balanced journal line amount.
///
/// The side is a tag rather than a pair of columns, so at most one of the
/// debit/credit projections is ever non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalancedLine {
    pub side: LineSide,
    pub amount: Decimal
}

impl BalancedLine {
    pub fn debit_amount(&self) -> Decimal {
        match self.side {
            LineSide::Debit => self.amount,
            LineSide::Credit => Decimal::ZERO
        }
    }

    pub fn credit_amount(&self) -> Decimal {
        match self.side {
            LineSide::Debit => Decimal::ZERO,
            LineSide::Credit => self.amount
        }
    }
}

/// Parameters for one journal entry's line allocation.
#[derive(Debug, Clone)]
pub struct JournalRequest {
    /// Number of lines to produce. Must be at least 2.
    pub line_count: usize,
    pub min_magnitude: Decimal,
    pub max_magnitude: Decimal
}

/// Produces `line_count` line amounts whose debits equal credits exactly.
///
/// All but the last line are independent draws with a random side; the last
/// line carries the exact residual on the lighter side. Because the residual
/// is computed in whole cents rather than estimated, the entry balances by
/// construction and no rounding tolerance is involved.
pub fn balance_lines(request: &JournalRequest, rng: &mut impl RandomSource) -> Result<Vec<BalancedLine>, AllocationError> {
    if request.line_count < 2 {
        return Err(AllocationError::TooFewLines { count: request.line_count });
    }

    let (min_cents, max_cents) = validate_bounds(request.min_magnitude, request.max_magnitude)?;

    let mut lines = Vec::with_capacity(request.line_count);
    let mut debit_cents: i64 = 0;
    let mut credit_cents: i64 = 0;

    for _ in 0..request.line_count - 1 {
        let cents = rng.cents_between(min_cents, max_cents);
        let side = if rng.chance(0.5) { LineSide::Debit } else { LineSide::Credit };

        match side {
            LineSide::Debit => debit_cents += cents,
            LineSide::Credit => credit_cents += cents
        }

        lines.push(BalancedLine { side, amount: from_cents(cents) });
    }

    // A zero residual still emits the final line so the entry keeps its
    // requested shape; it posts a 0.00 debit.
    let residual = debit_cents - credit_cents;
    let side = if residual > 0 { LineSide::Credit } else { LineSide::Debit };
    lines.push(BalancedLine { side, amount: from_cents(residual.abs()) });

    Ok(lines)
}

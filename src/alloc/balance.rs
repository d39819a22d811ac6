use rust_decimal::Decimal;

use crate::alloc::AllocationError;
use crate::types::{RandomSource, from_cents, round_amount, to_cents};

/// Parameters for one account's statement allocation.
#[derive(Debug, Clone)]
pub struct BalanceRequest {
    pub opening_balance: Decimal,
    pub target_closing_balance: Decimal,
    /// Number of transactions to produce. Must be at least 1.
    pub count: usize,
    pub min_magnitude: Decimal,
    pub max_magnitude: Decimal
}

/// One allocated statement amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocatedAmount {
    pub magnitude: Decimal,
    pub is_credit: bool
}

impl AllocatedAmount {
    /// The magnitude with its direction applied.
    pub fn signed(&self) -> Decimal {
        if self.is_credit { self.magnitude } else { -self.magnitude }
    }
}

/// Result of a balance allocation.
///
/// `closing_balance` is the balance actually reached. When the magnitude
/// bounds are too tight for the requested delta it differs from the target
/// by more than a cent; the allocator never raises for that, callers decide
/// whether the shortfall matters.
#[derive(Debug, Clone)]
pub struct BalanceAllocation {
    pub amounts: Vec<AllocatedAmount>,
    pub closing_balance: Decimal,
    pub target_closing_balance: Decimal
}

impl BalanceAllocation {
    /// Signed gap between the target and the balance actually reached.
    pub fn shortfall(&self) -> Decimal {
        self.target_closing_balance - self.closing_balance
    }

    /// Whether the achieved closing balance is within a cent of the target.
    pub fn converged(&self) -> bool {
        self.shortfall().abs() <= from_cents(1)
    }
}

/// Distributes a sequence of plausible transaction amounts so the running
/// balance moves from the opening balance toward the target closing balance.
///
/// Each step amortizes the outstanding delta evenly over the items still to
/// come, draws a magnitude in the configured range and caps it at that even
/// share, so the trajectory converges smoothly instead of dumping the whole
/// delta on the last item. The last item carries the exact residual, clamped
/// to `max_magnitude` and never randomized.
pub fn allocate_balance(request: &BalanceRequest, rng: &mut impl RandomSource) -> Result<BalanceAllocation, AllocationError> {
    if request.count == 0 {
        return Err(AllocationError::EmptyAllocation { count: request.count });
    }

    let (min_cents, max_cents) = validate_bounds(request.min_magnitude, request.max_magnitude)?;

    let mut amounts = Vec::with_capacity(request.count);
    let mut current = request.opening_balance;

    for step in 0..request.count {
        let remaining = request.count - step - 1;
        let outstanding = request.target_closing_balance - current;
        let is_credit = outstanding > Decimal::ZERO;

        let magnitude = if remaining == 0 {
            outstanding.abs().min(request.max_magnitude)
        } else {
            let share = outstanding / Decimal::from(remaining as u64 + 1);
            let draw = from_cents(rng.cents_between(min_cents, max_cents));
            share.abs().min(draw)
        };
        let magnitude = round_amount(magnitude);

        if is_credit {
            current += magnitude;
        } else {
            current -= magnitude;
        }

        amounts.push(AllocatedAmount { magnitude, is_credit });
    }

    Ok(BalanceAllocation {
        amounts,
        closing_balance: current,
        target_closing_balance: request.target_closing_balance
    })
}

pub(crate) fn validate_bounds(min: Decimal, max: Decimal) -> Result<(i64, i64), AllocationError> {
    if min < Decimal::ZERO {
        return Err(AllocationError::NegativeMagnitude { min });
    }

    if max < min {
        return Err(AllocationError::InvertedBounds { min, max });
    }

    let min_cents = to_cents(min).ok_or(AllocationError::UnrepresentableAmount { value: min })?;
    let max_cents = to_cents(max).ok_or(AllocationError::UnrepresentableAmount { value: max })?;

    Ok((min_cents, max_cents))
}

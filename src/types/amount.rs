use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Decimal places carried by every generated amount.
pub const AMOUNT_SCALE: u32 = 2;

/// Rounds an amount to whole cents (banker's rounding).
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp(AMOUNT_SCALE)
}

/// Converts an amount to whole cents, or `None` when it does not fit an i64.
pub fn to_cents(amount: Decimal) -> Option<i64> {
    amount.checked_mul(Decimal::ONE_HUNDRED)?.round().to_i64()
}

/// Builds an amount from whole cents.
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, AMOUNT_SCALE)
}

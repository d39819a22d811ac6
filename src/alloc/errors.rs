use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("Allocation requires at least one item, got [{count}]")]
    EmptyAllocation {
        count: usize
    },
    #[error("A balanced journal entry requires at least 2 lines, got [{count}]")]
    TooFewLines {
        count: usize
    },
    #[error("Magnitude bounds are inverted: min [{min}] exceeds max [{max}]")]
    InvertedBounds {
        min: Decimal,
        max: Decimal
    },
    #[error("Minimum magnitude must not be negative, got [{min}]")]
    NegativeMagnitude {
        min: Decimal
    },
    #[error("Amount [{value}] cannot be represented in whole cents")]
    UnrepresentableAmount {
        value: Decimal
    }
}

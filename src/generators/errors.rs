use thiserror::Error;

use crate::alloc::AllocationError;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Allocation failed: {0}")]
    Allocation(#[from] AllocationError),
    #[error("Date arithmetic overflowed for an offset of [{days}] days")]
    DateOutOfRange {
        days: i64
    }
}

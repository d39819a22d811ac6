mod balance;
mod errors;
mod journal;

pub use balance::{AllocatedAmount, BalanceAllocation, BalanceRequest, allocate_balance};
pub(crate) use balance::validate_bounds;
pub use errors::AllocationError;
pub use journal::{BalancedLine, JournalRequest, LineSide, balance_lines};

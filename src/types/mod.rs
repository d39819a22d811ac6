mod amount;
mod random;

pub use amount::{AMOUNT_SCALE, from_cents, round_amount, to_cents};
pub use random::{RandomSource, StdRandom};

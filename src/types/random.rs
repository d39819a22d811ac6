use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness injected into the allocators and generators.
///
/// Everything that draws a number goes through this trait so that a seeded
/// source reproduces a full artifact set exactly, draw for draw.
pub trait RandomSource {
    /// Uniform draw of whole cents in the inclusive range [lo, hi].
    fn cents_between(&mut self, lo: i64, hi: i64) -> i64;

    /// Uniform integer in the inclusive range [lo, hi].
    fn int_between(&mut self, lo: i64, hi: i64) -> i64;

    /// True with probability `probability` (clamped to [0, 1]).
    fn chance(&mut self, probability: f64) -> bool;

    /// Picks one element of a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        let index = self.int_between(0, items.len() as i64 - 1) as usize;
        &items[index]
    }
}

/// `RandomSource` backed by the standard PRNG.
pub struct StdRandom {
    rng: StdRng
}

impl StdRandom {
    /// Creates a deterministic source from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed)
        }
    }

    /// Creates a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy()
        }
    }
}

impl RandomSource for StdRandom {
    fn cents_between(&mut self, lo: i64, hi: i64) -> i64 {
        if lo >= hi {
            return lo;
        }

        self.rng.gen_range(lo..=hi)
    }

    fn int_between(&mut self, lo: i64, hi: i64) -> i64 {
        if lo >= hi {
            return lo;
        }

        self.rng.gen_range(lo..=hi)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }
}

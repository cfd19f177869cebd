//! Pseudorandom input for demos and benchmarks.
//!
//! The generator is always an explicit value. Pass a seed to get the same
//! input on every run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform `u32` source over `[0, bound)`.
#[derive(Debug, Clone)]
pub struct InputGenerator {
    rng: StdRng,
}

impl InputGenerator {
    /// Deterministic generator: equal seeds give equal sequences.
    pub fn seeded(seed: u64) -> Self {
        InputGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        InputGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    /// `count` values drawn uniformly from `[0, bound)`. A zero bound
    /// yields all zeros.
    pub fn values(&mut self, count: usize, bound: u32) -> Vec<u32> {
        if bound == 0 {
            return vec![0; count];
        }
        (0..count).map(|_| self.rng.gen_range(0..bound)).collect()
    }

    /// `count` values over the full `u32` range.
    pub fn full_range(&mut self, count: usize) -> Vec<u32> {
        (0..count).map(|_| self.rng.gen()).collect()
    }
}

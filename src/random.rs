//! Small seeded PRNG for animation randomness
//!
//! SplitMix64 state stepping. One generator is created per animation call,
//! so no random state is shared between invocations.

use embassy_time::Instant;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Provides a fresh seed for every animation call
pub type SeedSource = fn() -> u64;

/// Seed derived from the current time
pub fn time_seed() -> u64 {
    Instant::now().as_ticks()
}

/// SplitMix64 pseudo random number generator
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value
    pub const fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform value in `0..bound`
    ///
    /// Uses rejection sampling, so there is no modulo bias. Returns 0 when
    /// `bound` is 0.
    pub fn below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        // Values under this threshold would over-represent the low residues
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let value = self.next_u64();
            if value >= threshold {
                return value % bound;
            }
        }
    }

    /// Uniform index in `0..bound`
    #[allow(clippy::cast_possible_truncation)]
    pub fn index_below(&mut self, bound: usize) -> usize {
        self.below(bound as u64) as usize
    }

    /// Shuffle `items` in place (Fisher–Yates)
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index_below(i + 1);
            items.swap(i, j);
        }
    }
}

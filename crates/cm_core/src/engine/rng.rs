//! Injected randomness for the simulation.
//!
//! The engine never touches a global RNG: every draw goes through
//! [`RandomSource`], and the production implementation is a `ChaCha8Rng`
//! seeded from a single `u64`, so a match is a pure function of
//! (rosters, config, seed).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait RandomSource {
    /// Uniform integer in `0..bound`. Returns 0 when `bound` is 0.
    fn uniform(&mut self, bound: u32) -> u32;

    /// True with probability `probability` (clamped to `0.0..=1.0`).
    fn chance(&mut self, probability: f32) -> bool;
}

/// Seeded production source. Same seed, same delivery stream.
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }

    fn chance(&mut self, probability: f32) -> bool {
        if probability <= 0.0 {
            return false;
        }
        if probability >= 1.0 {
            return true;
        }
        self.rng.gen::<f32>() < probability
    }
}

/// Test double replaying queued draws. Exhausted queues yield 0 / false.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    uniforms: std::collections::VecDeque<u32>,
    chances: std::collections::VecDeque<bool>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(
        uniforms: impl IntoIterator<Item = u32>,
        chances: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            uniforms: uniforms.into_iter().collect(),
            chances: chances.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, bound: u32) -> u32 {
        let value = self.uniforms.pop_front().unwrap_or(0);
        if bound == 0 {
            0
        } else {
            value % bound
        }
    }

    fn chance(&mut self, _probability: f32) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}

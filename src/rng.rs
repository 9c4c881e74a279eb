//! Injectable random source.
//!
//! Every random decision in the game (miss checks, capture rolls, move
//! selection, wild encounters) goes through [`RandomSource`], so tests can
//! script the exact draws and a seed reproduces a whole session.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub trait RandomSource {
    /// A uniform value in `[0, 1)`. `reason` is only used for tracing.
    fn next_f64(&mut self, reason: &str) -> f64;

    /// A uniform index in `0..len`. `len` must be non-zero.
    fn choose_index(&mut self, len: usize, reason: &str) -> usize;
}

/// Production random source backed by a seedable `StdRng`.
pub struct GameRng {
    rng: StdRng,
}

impl GameRng {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for GameRng {
    fn next_f64(&mut self, reason: &str) -> f64 {
        let value = self.rng.random::<f64>();
        log::trace!("[RNG] {:.4} for: {}", value, reason);
        value
    }

    fn choose_index(&mut self, len: usize, reason: &str) -> usize {
        let index = self.rng.random_range(0..len);
        log::trace!("[RNG] index {} of {} for: {}", index, len, reason);
        index
    }
}

/// A random source that replays a fixed list of rolls.
///
/// `choose_index` consumes one roll as well and maps it onto the range, so a
/// roll of `0.0` always picks the first entry and `0.99` the last.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    outcomes: VecDeque<f64>,
}

impl ScriptedRng {
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        Self {
            outcomes: outcomes.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.outcomes.len()
    }

    fn next_outcome(&mut self, reason: &str) -> f64 {
        match self.outcomes.pop_front() {
            Some(outcome) => {
                #[cfg(test)]
                println!("[RNG] Consumed {} for: {}", outcome, reason);
                outcome
            }
            None => panic!(
                "ScriptedRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            ),
        }
    }
}

impl RandomSource for ScriptedRng {
    fn next_f64(&mut self, reason: &str) -> f64 {
        self.next_outcome(reason)
    }

    fn choose_index(&mut self, len: usize, reason: &str) -> usize {
        let roll = self.next_outcome(reason);
        ((roll * len as f64) as usize).min(len.saturating_sub(1))
    }
}

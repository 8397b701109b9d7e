//! Uniform selection seam.
//!
//! Every random branch in a run (action kind, add-vs-remove, which member to
//! terminate) goes through a single injected [`Chooser`], so tests can script
//! the decisions. There is no history and no repetition avoidance across runs.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one index out of `n` candidates.
pub trait Chooser: Send {
    /// Returns a uniformly chosen index in `0..n`. `n` must be non-zero.
    fn choose(&mut self, n: usize) -> usize;
}

/// The production chooser: OS-seeded by default, seedable for reproducible
/// runs.
pub struct RngChooser {
    rng: StdRng,
}

impl RngChooser {
    pub fn new() -> Self {
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

impl Default for RngChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl Chooser for RngChooser {
    fn choose(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }
}

/// Plays back a fixed list of picks, in order. Intended for tests; panics
/// when the script runs out so a miscounted scenario fails loudly.
pub struct ScriptedChooser {
    script: VecDeque<usize>,
}

impl ScriptedChooser {
    pub fn new(picks: &[usize]) -> Self {
        Self {
            script: picks.iter().copied().collect(),
        }
    }
}

impl Chooser for ScriptedChooser {
    fn choose(&mut self, n: usize) -> usize {
        let pick = self.script.pop_front().expect("chooser script exhausted");
        assert!(pick < n, "scripted pick {pick} out of range 0..{n}");
        pick
    }
}

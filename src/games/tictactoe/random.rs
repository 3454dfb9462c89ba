//! Random sources for computer move selection.
//!
//! The game never touches a global generator. It draws from whatever
//! [`RandomSource`] it was built with, so tests can pin the draw.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// Uniform source of values in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Picks an index in `0..count` as `floor(next_unit() * count)`.
    ///
    /// Returns `None` when `count` is zero.
    fn pick_index(&mut self, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let scaled = (self.next_unit() * count as f64).floor() as usize;
        Some(scaled.min(count - 1))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Thread-local generator from `rand`.
#[derive(Debug, Clone, Default)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    /// Creates a source backed by the thread-local generator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Reproducible generator seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    seed: u64,
}

impl SeededRandom {
    /// Creates a source from the given seed.
    #[instrument]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Cycles through a fixed list of values.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRandom {
    values: Vec<f64>,
    next: usize,
}

impl SequenceRandom {
    /// Creates a source that replays `values` in order, wrapping around.
    ///
    /// An empty list behaves like a constant `0.0`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

/// Source chosen at runtime from an optional seed.
#[derive(Debug, Clone)]
pub enum AnyRandom {
    /// Unseeded thread-local generator.
    Thread(ThreadRandom),
    /// Reproducible seeded generator.
    Seeded(SeededRandom),
}

impl AnyRandom {
    /// Seeded when a seed is given, thread-local otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => AnyRandom::Seeded(SeededRandom::new(seed)),
            None => AnyRandom::Thread(ThreadRandom::new()),
        }
    }
}

impl RandomSource for AnyRandom {
    fn next_unit(&mut self) -> f64 {
        match self {
            AnyRandom::Thread(r) => r.next_unit(),
            AnyRandom::Seeded(r) => r.next_unit(),
        }
    }
}

//! Injectable random source
//!
//! Random pick and the merge generator draw through [`RandomSource`] rather
//! than a global RNG, so callers can pass a seeded generator or a
//! [`FixedSequence`] and get repeatable output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform indices
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers guarantee `len > 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Pick one element uniformly, `None` for an empty slice
pub fn choose<'a, T, S>(source: &mut S, items: &'a [T]) -> Option<&'a T>
where
    S: RandomSource + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    let index = source.next_index(items.len());
    items.get(index)
}

/// [`RandomSource`] backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic generator for reproducible merges
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted
///
/// Each value is reduced modulo the requested length, so a sequence written
/// for one vocabulary never indexes out of bounds in another.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<usize>,
    position: usize,
}

impl FixedSequence {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            position: 0,
        }
    }
}

impl RandomSource for FixedSequence {
    fn next_index(&mut self, len: usize) -> usize {
        if self.values.is_empty() || len == 0 {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % len
    }
}

//! Seeded ChaCha20 generator and bounded integer sampling.

use super::OutputSequence;
use crate::seed::Seed;
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use rand_distr::Normal;
use thiserror::Error;

/// Errors raised for invalid generation parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequenceError {
    /// `low >= high` for a half-open range.
    #[error("invalid range: low ({low}) must be less than high ({high})")]
    InvalidRange {
        /// Requested lower bound.
        low: i64,
        /// Requested upper bound.
        high: i64,
    },
    /// `min > max` for an inclusive range.
    #[error("invalid inclusive range: min ({min}) must not exceed max ({max})")]
    InvalidInclusiveRange {
        /// Requested minimum.
        min: i64,
        /// Requested maximum.
        max: i64,
    },
    /// Float range empty, non-finite, or wider than `f64` can hold.
    #[error("invalid float range: [{min}, {max}) must be finite and non-empty")]
    InvalidFloatRange {
        /// Requested minimum.
        min: f64,
        /// Requested maximum.
        max: f64,
    },
    /// Normal distribution with a non-finite mean or a bad standard deviation.
    #[error("invalid normal distribution: mean {mean}, sigma {sigma}")]
    InvalidNormal {
        /// Requested mean.
        mean: f64,
        /// Requested standard deviation.
        sigma: f64,
    },
    /// Zero values requested.
    #[error("invalid count: {count} (at least one value must be requested)")]
    InvalidCount {
        /// Requested count.
        count: usize,
    },
}

/// Checks `low < high` and `count >= 1`.
pub fn validate(low: i64, high: i64, count: usize) -> Result<(), SequenceError> {
    if low >= high {
        return Err(SequenceError::InvalidRange { low, high });
    }
    if count == 0 {
        return Err(SequenceError::InvalidCount { count });
    }
    Ok(())
}

/// Draws `count` integers uniformly from `[low, high)`.
///
/// The generator is created from `seed` for this call and dropped on
/// return; nothing carries over between calls.
pub fn generate(
    seed: &Seed,
    low: i64,
    high: i64,
    count: usize,
) -> Result<OutputSequence, SequenceError> {
    SeededRng::from_seed(seed).integers(low, high, count)
}

/// Stateless front end over [`generate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceGenerator;

impl SequenceGenerator {
    /// Creates the generator front end.
    pub fn new() -> Self {
        Self
    }

    /// See [`generate`].
    pub fn generate(
        &self,
        seed: &Seed,
        low: i64,
        high: i64,
        count: usize,
    ) -> Result<OutputSequence, SequenceError> {
        generate(seed, low, high, count)
    }
}

/// A ChaCha20 generator keyed from a [`Seed`].
///
/// The 256-bit big-endian seed value is the ChaCha20 key; the stream
/// and block counter start at zero.
pub struct SeededRng {
    /// The underlying ChaCha20 generator.
    inner: ChaCha20Rng,
    /// Bytes of generator output consumed so far.
    bytes_drawn: u64,
}

impl SeededRng {
    /// Creates a generator whose state depends only on `seed`.
    pub fn from_seed(seed: &Seed) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed.rng_key()),
            bytes_drawn: 0,
        }
    }

    /// Draws `count` integers uniformly from `[low, high)`, in order.
    pub fn integers(
        &mut self,
        low: i64,
        high: i64,
        count: usize,
    ) -> Result<OutputSequence, SequenceError> {
        validate(low, high, count)?;

        let dist = Uniform::new(low, high);
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(dist.sample(&mut *self));
        }

        tracing::debug!(low, high, count, bytes_drawn = self.bytes_drawn, "Generated sequence");

        Ok(OutputSequence::new(values, low, high))
    }

    /// Draws one integer uniformly from `[min, max]`.
    pub fn int_inclusive(&mut self, min: i64, max: i64) -> Result<i64, SequenceError> {
        if min > max {
            return Err(SequenceError::InvalidInclusiveRange { min, max });
        }
        Ok(Uniform::new_inclusive(min, max).sample(self))
    }

    /// Draws one float uniformly from `[min, max)`.
    ///
    /// The width `max - min` must itself be finite, so
    /// `[-f64::MAX, f64::MAX)` is rejected.
    pub fn float_in(&mut self, min: f64, max: f64) -> Result<f64, SequenceError> {
        if !(min.is_finite() && max.is_finite() && min < max && (max - min).is_finite()) {
            return Err(SequenceError::InvalidFloatRange { min, max });
        }
        Ok(Uniform::new(min, max).sample(self))
    }

    /// Draws one float from a normal distribution.
    ///
    /// `sigma == 0.0` always yields `mean`.
    pub fn normal(&mut self, mean: f64, sigma: f64) -> Result<f64, SequenceError> {
        if !mean.is_finite() {
            return Err(SequenceError::InvalidNormal { mean, sigma });
        }
        let dist =
            Normal::new(mean, sigma).map_err(|_| SequenceError::InvalidNormal { mean, sigma })?;
        Ok(dist.sample(self))
    }

    /// Returns a random permutation of `0..n`.
    pub fn shuffled_indices(&mut self, n: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(self);
        indices
    }

    /// Shuffles `items[initial_index..]` in place, leaving the prefix untouched.
    pub fn shuffle_from<T>(&mut self, items: &mut [T], initial_index: usize) {
        if let Some(tail) = items.get_mut(initial_index..) {
            tail.shuffle(self);
        }
    }

    /// Returns bytes of generator output consumed so far.
    pub fn bytes_drawn(&self) -> u64 {
        self.bytes_drawn
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.bytes_drawn += 4;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.bytes_drawn += 8;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.bytes_drawn += dest.len() as u64;
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.bytes_drawn += dest.len() as u64;
        self.inner.try_fill_bytes(dest)
    }
}

impl std::fmt::Debug for SeededRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeededRng")
            .field("bytes_drawn", &self.bytes_drawn)
            .finish_non_exhaustive()
    }
}

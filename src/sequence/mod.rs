//! Deterministic bounded-integer sequences.
//!
//! A ChaCha20 generator is keyed exclusively from a [`Seed`] and sampled
//! with rand's portable uniform integer algorithm, so a fixed
//! `(seed, low, high, count)` yields the same values on every platform.
//!
//! [`Seed`]: crate::seed::Seed

mod generator;
mod output;

pub use generator::{generate, validate, SeededRng, SequenceError, SequenceGenerator};
pub use output::OutputSequence;

//! Fixed-width digest computation over entropy samples.
//!
//! The hash is used as a deterministic mixing function, not as a
//! security boundary: any input byte change avalanches across the
//! whole digest, and the same input always yields the same output.

mod engine;

pub use engine::{Digest, DigestEngine, HashAlgorithm};

//! Seed derivation from digests.
//!
//! A digest is read as an unsigned base-256 integer, most significant
//! byte first. This byte order is part of the reproducibility contract:
//! changing it would change every seed ever derived.

mod value;

pub use value::{Seed, SeedDeriver, SeedError, SEED_BYTES};

//! Chaotic Seed Library
//!
//! Turns a physically-sourced entropy artifact (a captured image) into a
//! reproducible stream of bounded integers.
//!
//! # Architecture
//!
//! The system follows an explicit, stateless data flow:
//!
//! ```text
//! source → digest → seed → sequence
//!    ↓
//! analysis (optional diagnostics)
//! ```
//!
//! # Reproducibility Contract
//!
//! - The artifact is hashed in full (SHA-1 by default).
//! - The digest is read as a **big-endian** unsigned integer.
//! - That integer, as a 256-bit big-endian value, keys ChaCha20.
//! - Values are drawn with rand's uniform integer sampler.
//!
//! Same artifact ⇒ same digest ⇒ same seed ⇒ same output, on every
//! platform, until the artifact is swapped.
//!
//! # Example
//!
//! ```no_run
//! use chaotic_seed::{pipeline::SeedPipeline, sequence};
//!
//! let pipeline = SeedPipeline::from_path("data/lava.jpg");
//!
//! // One-shot: re-reads and re-hashes the artifact.
//! let values = pipeline.generate(0, (1 << 31) - 1, 1).unwrap();
//! println!("{}", values.values()[0]);
//!
//! // Derive once, reuse explicitly.
//! let seed = pipeline.derive_seed().unwrap();
//! let dice = sequence::generate(&seed, 1, 7, 10).unwrap();
//! let coins = sequence::generate(&seed, 0, 2, 10).unwrap();
//! # let _ = (dice, coins);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod digest;
pub mod pipeline;
pub mod seed;
pub mod sequence;
pub mod source;

// Re-export commonly used types at crate root
pub use analysis::{QualityThresholds, SampleDiagnostics, SampleStatistics};
pub use config::{ConfigError, FileConfig, RunSettings};
pub use digest::{Digest, DigestEngine, HashAlgorithm};
pub use pipeline::{generate_number, PipelineError, SeedPipeline};
pub use seed::{Seed, SeedDeriver, SeedError};
pub use sequence::{OutputSequence, SeededRng, SequenceError, SequenceGenerator};
pub use source::{EntropySample, EntropySource, FileSource, MemorySource, SourceError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

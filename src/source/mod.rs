//! Entropy artifact input.
//!
//! This module reads the raw bytes of a physically-variable artifact,
//! typically a captured photograph. The artifact is treated as opaque
//! bytes; its format is never interpreted. Operators refresh the entropy
//! root by swapping the file, not by changing code.

mod reader;
mod sample;

pub use reader::{EntropySource, FileSource, MemorySource, SourceError};
pub use sample::EntropySample;

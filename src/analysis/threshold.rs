//! Quality thresholds for sample diagnostics.
//!
//! A violation is reported, never enforced: the only hard requirement on
//! an artifact is that it is non-empty.

use super::statistics::SampleStatistics;
use serde::{Deserialize, Serialize};

/// Limits an artifact should stay within to look like a real capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityThresholds {
    /// Minimum Shannon entropy in bits per byte.
    pub min_entropy_bits_per_byte: f64,
    /// Maximum share of the artifact a single byte value may take.
    pub max_dominant_share: f64,
    /// Maximum run of one repeated byte.
    pub max_run_length: usize,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            min_entropy_bits_per_byte: 7.0,
            max_dominant_share: 0.05,
            max_run_length: 1024,
        }
    }
}

impl QualityThresholds {
    /// Checks statistics against thresholds, reporting the first violation.
    ///
    /// Entropy is checked first, then the dominant byte, then run length.
    pub fn check(&self, stats: &SampleStatistics) -> Result<(), ThresholdViolation> {
        if stats.entropy_bits_per_byte < self.min_entropy_bits_per_byte {
            return Err(ThresholdViolation::LowEntropy {
                observed: stats.entropy_bits_per_byte,
                threshold: self.min_entropy_bits_per_byte,
            });
        }

        if stats.dominant_share > self.max_dominant_share {
            return Err(ThresholdViolation::DominantByte {
                byte: stats.dominant_byte,
                observed: stats.dominant_share,
                threshold: self.max_dominant_share,
            });
        }

        if stats.longest_run > self.max_run_length {
            return Err(ThresholdViolation::LongRun {
                observed: stats.longest_run,
                threshold: self.max_run_length,
            });
        }

        Ok(())
    }
}

/// The first threshold an artifact failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThresholdViolation {
    /// Byte histogram entropy is below the minimum.
    #[error("entropy {observed:.3} bits/byte below threshold {threshold:.3}")]
    LowEntropy {
        /// Measured bits per byte.
        observed: f64,
        /// Configured minimum.
        threshold: f64,
    },

    /// One byte value makes up too much of the artifact.
    #[error("byte 0x{byte:02x} covers {observed:.4} of the artifact, above {threshold:.4}")]
    DominantByte {
        /// The dominant byte value.
        byte: u8,
        /// Its share of the artifact.
        observed: f64,
        /// Configured maximum share.
        threshold: f64,
    },

    /// The artifact contains a run of one repeated byte that is too long.
    #[error("run of {observed} identical bytes exceeds {threshold}")]
    LongRun {
        /// Longest run found.
        observed: usize,
        /// Configured maximum.
        threshold: usize,
    },
}

//! Entropy sample diagnostics.
//!
//! Cheap sanity checks run over the artifact bytes before hashing. They
//! flag blank frames, zero-filled files and padded captures in the logs
//! but never block seed derivation.

mod statistics;
mod threshold;

pub use statistics::SampleStatistics;
pub use threshold::{QualityThresholds, ThresholdViolation};

use crate::source::EntropySample;

/// Statistics for one sample plus the threshold verdict.
#[derive(Debug, Clone)]
pub struct SampleDiagnostics {
    /// Byte statistics of the artifact.
    pub stats: SampleStatistics,
    /// First violated threshold, if any.
    pub violation: Option<ThresholdViolation>,
}

impl SampleDiagnostics {
    /// True when no threshold was violated.
    pub fn looks_reasonable(&self) -> bool {
        self.violation.is_none()
    }
}

/// Analyzes a sample and logs a warning on threshold violation.
pub fn diagnose(sample: &EntropySample, thresholds: &QualityThresholds) -> SampleDiagnostics {
    let stats = SampleStatistics::analyze(sample);
    let violation = thresholds.check(&stats).err();

    match &violation {
        Some(violation) => tracing::warn!(
            origin = sample.origin(),
            violation = %violation,
            "Entropy artifact looks degenerate"
        ),
        None => tracing::trace!(
            entropy = stats.entropy_bits_per_byte,
            dominant_share = stats.dominant_share,
            longest_run = stats.longest_run,
            "Sample diagnostics passed"
        ),
    }

    SampleDiagnostics { stats, violation }
}

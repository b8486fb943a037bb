//! File-based configuration.
//!
//! An optional TOML file can supply any invocation parameter. Values
//! given on the command line take precedence; see [`RunSettings`].

use crate::analysis::QualityThresholds;
use crate::digest::HashAlgorithm;
use crate::seed::Seed;
use crate::sequence::{self, SequenceError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {reason}")]
    FileReadError {
        /// Config file path.
        path: String,
        /// Underlying IO error message.
        reason: String,
    },
    /// The config file is not valid TOML for [`FileConfig`].
    #[error("failed to parse config file: {0}")]
    ParseError(String),
    /// A required setting was given neither in the file nor on the command line.
    #[error("missing required setting: {0}")]
    Missing(&'static str),
    /// Range or count rejected by the sequence generator.
    #[error(transparent)]
    Invalid(#[from] SequenceError),
}

/// Full configuration file format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// `[source]` section.
    #[serde(default)]
    pub source: SourceConfig,
    /// `[digest]` section.
    #[serde(default)]
    pub digest: DigestConfig,
    /// `[sequence]` section.
    #[serde(default)]
    pub sequence: SequenceConfig,
    /// `[analysis]` section.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Entropy artifact settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Path to the entropy artifact.
    pub path: Option<PathBuf>,
}

/// Digest settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DigestConfig {
    /// Hash applied to the artifact; SHA-1 unless set.
    #[serde(default)]
    pub algorithm: HashAlgorithm,
}

/// Output sequence settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequenceConfig {
    /// Inclusive lower bound.
    pub low: Option<i64>,
    /// Exclusive upper bound.
    pub high: Option<i64>,
    /// Number of values to draw.
    pub count: Option<usize>,
    /// Previously derived seed; when set, the artifact is not read.
    pub seed: Option<Seed>,
}

/// Sample diagnostics settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Run diagnostics on every `generate`.
    #[serde(default)]
    pub enabled: bool,
    /// Limits checked when diagnostics run.
    #[serde(flatten)]
    pub thresholds: QualityThresholds,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Overrides gathered from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Artifact path.
    pub path: Option<PathBuf>,
    /// Digest algorithm.
    pub algorithm: Option<HashAlgorithm>,
    /// Inclusive lower bound.
    pub low: Option<i64>,
    /// Exclusive upper bound.
    pub high: Option<i64>,
    /// Number of values to draw.
    pub count: Option<usize>,
    /// Explicit seed, replacing the artifact.
    pub seed: Option<Seed>,
    /// Force diagnostics on, even if the file disables them.
    pub check: bool,
}

/// Where the generator's seed comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOrigin {
    /// Hash this artifact.
    Artifact(PathBuf),
    /// Use this seed directly.
    Explicit(Seed),
}

/// Fully resolved and validated settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    /// Artifact path or explicit seed.
    pub origin: SeedOrigin,
    /// Digest algorithm for artifact seeds.
    pub algorithm: HashAlgorithm,
    /// Inclusive lower bound.
    pub low: i64,
    /// Exclusive upper bound.
    pub high: i64,
    /// Number of values to draw, at least 1.
    pub count: usize,
    /// Thresholds for sample diagnostics, when enabled.
    pub diagnostics: Option<QualityThresholds>,
}

impl RunSettings {
    /// Merges file values with command-line overrides and validates.
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<Self, ConfigError> {
        let low = overrides.low.or(file.sequence.low).ok_or(ConfigError::Missing("low"))?;
        let high = overrides.high.or(file.sequence.high).ok_or(ConfigError::Missing("high"))?;
        let count = overrides
            .count
            .or(file.sequence.count)
            .ok_or(ConfigError::Missing("count"))?;
        sequence::validate(low, high, count)?;

        let origin = match overrides.seed.or(file.sequence.seed) {
            Some(seed) => SeedOrigin::Explicit(seed),
            None => SeedOrigin::Artifact(
                overrides
                    .path
                    .or(file.source.path)
                    .ok_or(ConfigError::Missing("path"))?,
            ),
        };

        let diagnostics = if overrides.check || file.analysis.enabled {
            Some(file.analysis.thresholds)
        } else {
            None
        };

        Ok(Self {
            origin,
            algorithm: overrides.algorithm.unwrap_or(file.digest.algorithm),
            low,
            high,
            count,
            diagnostics,
        })
    }
}

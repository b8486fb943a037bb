//! End-to-end seed pipeline.
//!
//! Composes source → digest → seed → sequence. Every call re-reads the
//! artifact and recomputes the digest; callers wanting many sequences
//! from one entropy root should call [`SeedPipeline::derive_seed`] once
//! and pass the seed to [`crate::sequence::generate`] explicitly.

use crate::analysis::{self, QualityThresholds, SampleDiagnostics};
use crate::digest::{DigestEngine, HashAlgorithm};
use crate::seed::{Seed, SeedDeriver};
use crate::sequence::{self, OutputSequence, SequenceError};
use crate::source::{EntropySource, FileSource, SourceError};
use std::path::Path;
use thiserror::Error;

/// Errors surfaced by the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The artifact could not be read or was empty.
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(#[from] SourceError),
    /// Range or count rejected.
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

/// Source-to-sequence pipeline over one entropy source.
pub struct SeedPipeline<S: EntropySource> {
    source: S,
    engine: DigestEngine,
    deriver: SeedDeriver,
    /// Sample diagnostics; `None` skips them.
    thresholds: Option<QualityThresholds>,
}

impl SeedPipeline<FileSource> {
    /// Creates a pipeline reading the artifact at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::new(FileSource::new(path.as_ref()))
    }
}

impl<S: EntropySource> SeedPipeline<S> {
    /// Creates a pipeline with the default digest and no diagnostics.
    pub fn new(source: S) -> Self {
        Self {
            source,
            engine: DigestEngine::default(),
            deriver: SeedDeriver::new(),
            thresholds: None,
        }
    }

    /// Selects the digest algorithm.
    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.engine = DigestEngine::new(algorithm);
        self
    }

    /// Enables sample diagnostics against the given thresholds.
    pub fn with_diagnostics(mut self, thresholds: QualityThresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Returns the entropy source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the digest algorithm in use.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.engine.algorithm()
    }

    /// Reads the artifact afresh and derives its seed.
    pub fn derive_seed(&self) -> Result<Seed, PipelineError> {
        self.derive_seed_with_report().map(|(seed, _)| seed)
    }

    /// Like [`derive_seed`](Self::derive_seed), also returning the sample
    /// diagnostics when they are enabled.
    ///
    /// A failed check is reported here and logged, but the seed is still
    /// derived.
    pub fn derive_seed_with_report(
        &self,
    ) -> Result<(Seed, Option<SampleDiagnostics>), PipelineError> {
        let sample = self.source.read()?;

        let report = self
            .thresholds
            .as_ref()
            .map(|thresholds| analysis::diagnose(&sample, thresholds));

        let digest = self.engine.digest(&sample);
        Ok((self.deriver.derive(&digest), report))
    }

    /// Derives the seed and draws `count` integers from `[low, high)`.
    ///
    /// Parameters are validated before the artifact is touched.
    pub fn generate(
        &self,
        low: i64,
        high: i64,
        count: usize,
    ) -> Result<OutputSequence, PipelineError> {
        sequence::validate(low, high, count)?;

        let seed = self.derive_seed()?;
        let output = sequence::generate(&seed, low, high, count)?;

        tracing::info!(
            origin = %self.source.origin(),
            algorithm = %self.engine.algorithm(),
            low,
            high,
            count,
            "Generated sequence from entropy artifact"
        );

        Ok(output)
    }
}

/// Hashes the artifact at `path` with SHA-1 and draws `count` integers
/// from `[low, high)` using the derived seed.
pub fn generate_number(
    path: impl AsRef<Path>,
    low: i64,
    high: i64,
    count: usize,
) -> Result<OutputSequence, PipelineError> {
    SeedPipeline::from_path(path).generate(low, high, count)
}

//! Entropy source abstraction.
//!
//! A trait over "something that yields the artifact bytes", with a
//! filesystem implementation for real use and an in-memory one for
//! tests and embedding.

use super::EntropySample;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised when the entropy artifact cannot be used.
///
/// Every variant is fatal and is never retried; the artifact is
/// operator-managed.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Nothing exists at the artifact path.
    #[error("entropy artifact not found: {}", .path.display())]
    NotFound {
        /// Artifact path.
        path: PathBuf,
    },
    /// The artifact exists but could not be read.
    #[error("failed to read entropy artifact {}: {source}", .path.display())]
    Unreadable {
        /// Artifact path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The artifact has no content.
    #[error("entropy artifact is empty: {origin}")]
    Empty {
        /// Where the empty content came from.
        origin: String,
    },
}

/// Trait for entropy artifact providers.
pub trait EntropySource {
    /// Reads the full artifact content.
    ///
    /// Implementations must not cache: every call observes the current
    /// content, so a swapped artifact takes effect on the next read.
    fn read(&self) -> Result<EntropySample, SourceError>;

    /// Describes where the bytes come from.
    fn origin(&self) -> String;
}

/// Reads the artifact from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the artifact path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntropySource for FileSource {
    fn read(&self) -> Result<EntropySample, SourceError> {
        let data = std::fs::read(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SourceError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                SourceError::Unreadable {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        tracing::trace!(path = %self.path.display(), bytes = data.len(), "Read entropy artifact");

        EntropySample::new(data, self.origin()).ok_or_else(|| SourceError::Empty {
            origin: self.origin(),
        })
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory source that yields a fixed byte buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    data: Vec<u8>,
    label: String,
}

impl MemorySource {
    /// Creates a source yielding `data`, labeled `<memory>`.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            label: "<memory>".to_string(),
        }
    }

    /// Sets the origin label reported in samples and errors.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl EntropySource for MemorySource {
    fn read(&self) -> Result<EntropySample, SourceError> {
        EntropySample::new(self.data.clone(), self.origin()).ok_or_else(|| SourceError::Empty {
            origin: self.origin(),
        })
    }

    fn origin(&self) -> String {
        self.label.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_source_reads_full_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"sensor noise").unwrap();

        let source = FileSource::new(file.path());
        let sample = source.read().unwrap();

        assert_eq!(sample.data(), b"sensor noise");
        assert_eq!(sample.origin(), file.path().display().to_string());
    }

    #[test]
    fn test_missing_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.jpg"));

        assert!(matches!(source.read(), Err(SourceError::NotFound { .. })));
    }

    #[test]
    fn test_empty_file_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let source = FileSource::new(file.path());

        assert!(matches!(source.read(), Err(SourceError::Empty { .. })));
    }

    #[test]
    fn test_directory_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path());

        assert!(matches!(source.read(), Err(SourceError::Unreadable { .. })));
    }

    #[test]
    fn test_read_observes_swapped_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"first").unwrap();
        let source = FileSource::new(file.path());
        assert_eq!(source.read().unwrap().data(), b"first");

        std::fs::write(file.path(), b"second").unwrap();
        assert_eq!(source.read().unwrap().data(), b"second");
    }

    #[test]
    fn test_memory_source_label() {
        let source = MemorySource::new(vec![7u8; 8]).with_label("fixture");
        let sample = source.read().unwrap();

        assert_eq!(sample.origin(), "fixture");
        assert_eq!(sample.len(), 8);
    }

    #[test]
    fn test_memory_source_empty() {
        let source = MemorySource::default();
        assert!(matches!(source.read(), Err(SourceError::Empty { .. })));
    }
}

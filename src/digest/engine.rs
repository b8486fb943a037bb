//! Hash-based digest engine.

use crate::source::EntropySample;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest as _, Sha256};

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-1, 160-bit output. Default, for seed compatibility with
    /// existing recorded runs.
    #[default]
    Sha1,
    /// SHA-256, 256-bit output.
    Sha256,
    /// BLAKE3, 256-bit output.
    Blake3,
}

impl HashAlgorithm {
    /// Returns the digest width in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 | HashAlgorithm::Blake3 => 32,
        }
    }

    /// Returns the lowercase name used in config files and on the CLI.
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Blake3 => "blake3",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(HashAlgorithm::Sha1),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "blake3" => Ok(HashAlgorithm::Blake3),
            other => Err(format!(
                "unknown hash algorithm '{other}' (expected sha1, sha256 or blake3)"
            )),
        }
    }
}

/// Fixed-length digest of an entropy sample.
#[derive(Clone, PartialEq, Eq)]
pub struct Digest {
    bytes: Vec<u8>,
    algorithm: HashAlgorithm,
}

impl Digest {
    /// Returns the digest bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the digest width in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the digest has no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the algorithm that produced this digest.
    #[inline]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Returns the lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Digest")
            .field("algorithm", &self.algorithm)
            .field("hex", &self.to_hex())
            .finish()
    }
}

/// Computes digests of entropy samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigestEngine {
    algorithm: HashAlgorithm,
}

impl DigestEngine {
    /// Creates an engine using the given algorithm.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Returns the configured algorithm.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Hashes the full sample content.
    pub fn digest(&self, sample: &EntropySample) -> Digest {
        let bytes = self.digest_bytes(sample.data());

        tracing::debug!(
            algorithm = %self.algorithm,
            origin = sample.origin(),
            input_bytes = sample.len(),
            "Computed artifact digest"
        );

        Digest {
            bytes,
            algorithm: self.algorithm,
        }
    }

    fn digest_bytes(&self, data: &[u8]) -> Vec<u8> {
        match self.algorithm {
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Blake3 => blake3::hash(data).as_bytes().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(data: &[u8]) -> EntropySample {
        EntropySample::new(data.to_vec(), "test").unwrap()
    }

    #[test]
    fn test_sha1_known_vector() {
        let engine = DigestEngine::new(HashAlgorithm::Sha1);
        let digest = engine.digest(&sample(b"abc"));

        assert_eq!(digest.len(), 20);
        assert_eq!(digest.to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_sha256_width() {
        let engine = DigestEngine::new(HashAlgorithm::Sha256);
        let digest = engine.digest(&sample(b"chaotic lava lamp capture, frame 0001"));

        assert_eq!(digest.len(), 32);
        assert_eq!(
            digest.to_hex(),
            "ae4b118f61ecf487ba600b779a742fc9fd88ba73e186c6c603712662daabdfdc"
        );
    }

    #[test]
    fn test_blake3_width() {
        let engine = DigestEngine::new(HashAlgorithm::Blake3);
        let digest = engine.digest(&sample(&[0x42; 1000]));

        assert_eq!(digest.len(), HashAlgorithm::Blake3.output_len());
        assert_eq!(digest.algorithm(), HashAlgorithm::Blake3);
    }

    #[test]
    fn test_same_input_same_digest() {
        let engine = DigestEngine::default();

        let first = engine.digest(&sample(&[0x10; 64]));
        let second = engine.digest(&sample(&[0x10; 64]));

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_input_different_digest() {
        let engine = DigestEngine::default();

        let first = engine.digest(&sample(&[0x00; 100]));
        let second = engine.digest(&sample(&[0x01; 100]));

        assert_ne!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("SHA-256".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha256));
        assert_eq!("blake3".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Blake3));
        assert!("md5".parse::<HashAlgorithm>().is_err());
        assert_eq!(HashAlgorithm::default().to_string(), "sha1");
    }
}

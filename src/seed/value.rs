//! Digest-to-integer seed interpretation.

use crate::digest::Digest;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Maximum seed magnitude in bytes (256 bits).
///
/// Also the ChaCha20 key size, so every seed maps onto exactly one key.
pub const SEED_BYTES: usize = 32;

/// Errors raised when building a seed from external input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The value does not fit in 256 bits.
    #[error("seed exceeds {} bits", SEED_BYTES * 8)]
    TooLarge,
    /// The text is neither decimal nor `0x` hex.
    #[error("invalid seed '{0}': expected decimal digits or 0x-prefixed hex")]
    Parse(String),
}

/// Non-negative integer used to initialize the generator.
///
/// Stored as a 256-bit big-endian magnitude plus the width (in bytes) of
/// the digest or literal it came from. Two seeds are equal when their
/// integer values are equal, regardless of width.
#[derive(Clone, Copy)]
pub struct Seed {
    /// Big-endian magnitude, left-padded with zeros.
    value: [u8; SEED_BYTES],
    /// Source width in bytes; `value < 2^(8 * width)`.
    width: usize,
}

impl Seed {
    /// Interprets digest bytes as a big-endian integer.
    ///
    /// Every supported algorithm yields at most 32 bytes, so the whole
    /// digest is kept. A wider digest would keep its last 32 bytes, the
    /// least significant 256 bits.
    pub fn from_digest(digest: &Digest) -> Self {
        Self::from_be_slice(digest.as_bytes())
    }

    /// Interprets arbitrary bytes as a big-endian integer.
    ///
    /// Leading zero bytes are allowed beyond 32 bytes; the magnitude
    /// itself must fit in 256 bits.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, SeedError> {
        let first_nonzero = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        if bytes.len() - first_nonzero > SEED_BYTES {
            return Err(SeedError::TooLarge);
        }
        let start = bytes.len().saturating_sub(SEED_BYTES);
        Ok(Self::from_be_slice(&bytes[start..]))
    }

    /// Big-endian load of at most the last 32 bytes of `bytes`.
    fn from_be_slice(bytes: &[u8]) -> Self {
        let bytes = &bytes[bytes.len().saturating_sub(SEED_BYTES)..];
        let mut value = [0u8; SEED_BYTES];
        value[SEED_BYTES - bytes.len()..].copy_from_slice(bytes);
        Self {
            value,
            width: bytes.len().max(1),
        }
    }

    /// Parses a hex string (no prefix), keeping its width.
    pub fn from_hex(hex_str: &str) -> Result<Self, SeedError> {
        let digits = hex_str.trim();
        if digits.is_empty() {
            return Err(SeedError::Parse(hex_str.to_string()));
        }
        let padded = if digits.len() % 2 == 1 {
            format!("0{digits}")
        } else {
            digits.to_string()
        };
        let bytes = hex::decode(padded).map_err(|_| SeedError::Parse(hex_str.to_string()))?;
        Self::from_be_bytes(&bytes)
    }

    /// Parses a decimal string.
    pub fn from_decimal(decimal: &str) -> Result<Self, SeedError> {
        let digits = decimal.trim();
        if digits.is_empty() {
            return Err(SeedError::Parse(decimal.to_string()));
        }

        let mut value = [0u8; SEED_BYTES];
        for ch in digits.chars() {
            let mut carry = ch
                .to_digit(10)
                .ok_or_else(|| SeedError::Parse(decimal.to_string()))?;
            for byte in value.iter_mut().rev() {
                let acc = u32::from(*byte) * 10 + carry;
                *byte = (acc & 0xFF) as u8;
                carry = acc >> 8;
            }
            if carry != 0 {
                return Err(SeedError::TooLarge);
            }
        }

        let significant = SEED_BYTES - value.iter().take_while(|&&b| b == 0).count();
        Ok(Self {
            value,
            width: significant.max(1),
        })
    }

    /// Returns the 256-bit big-endian key handed to the generator.
    #[inline]
    pub fn rng_key(&self) -> [u8; SEED_BYTES] {
        self.value
    }

    /// Returns the source width in bytes.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of significant bits in the integer.
    pub fn bits(&self) -> usize {
        let leading: usize = self
            .value
            .iter()
            .position(|&b| b != 0)
            .map(|i| i * 8 + self.value[i].leading_zeros() as usize)
            .unwrap_or(SEED_BYTES * 8);
        SEED_BYTES * 8 - leading
    }

    /// Returns lowercase hex padded to the source width.
    ///
    /// For digest-derived seeds this equals the digest's own hex.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.value[SEED_BYTES - self.width..])
    }

    /// Returns the base-10 representation.
    pub fn to_decimal(&self) -> String {
        let mut n = self.value;
        let mut digits = Vec::new();

        while n.iter().any(|&b| b != 0) {
            let mut rem = 0u32;
            for byte in n.iter_mut() {
                let acc = (rem << 8) | u32::from(*byte);
                *byte = (acc / 10) as u8;
                rem = acc % 10;
            }
            digits.push(char::from(b'0' + rem as u8));
        }

        if digits.is_empty() {
            return "0".to_string();
        }
        digits.iter().rev().collect()
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Seed {}

impl std::hash::Hash for Seed {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_decimal())
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seed")
            .field("hex", &self.to_hex())
            .field("width", &self.width)
            .finish()
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    /// Accepts `0x`-prefixed hex or plain decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex_digits) => Self::from_hex(hex_digits),
            None => Self::from_decimal(trimmed),
        }
    }
}

impl Serialize for Seed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", self.to_hex()))
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Derives seeds from digests.
///
/// Byte order is big-endian: `digest[0]` is the most significant byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedDeriver;

impl SeedDeriver {
    /// Creates a deriver.
    pub fn new() -> Self {
        Self
    }

    /// Interprets the digest as a big-endian unsigned integer.
    pub fn derive(&self, digest: &Digest) -> Seed {
        let seed = Seed::from_digest(digest);
        tracing::debug!(
            algorithm = %digest.algorithm(),
            significant_bits = seed.bits(),
            "Derived seed from digest"
        );
        seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::{DigestEngine, HashAlgorithm};
    use crate::source::EntropySample;

    const GOLDEN_CONTENT: &[u8] = b"chaotic lava lamp capture, frame 0001";
    const GOLDEN_DECIMAL: &str = "1426106817587587437406199911688411345139816069088";

    fn golden_digest() -> Digest {
        let sample = EntropySample::new(GOLDEN_CONTENT.to_vec(), "golden").unwrap();
        DigestEngine::new(HashAlgorithm::Sha1).digest(&sample)
    }

    #[test]
    fn test_big_endian_interpretation() {
        let seed = Seed::from_be_bytes(&[0x01, 0x00]).unwrap();
        assert_eq!(seed.to_decimal(), "256");
        assert_eq!(seed.bits(), 9);

        let seed = Seed::from_be_bytes(&[0x00, 0xFF]).unwrap();
        assert_eq!(seed.to_decimal(), "255");
        assert_eq!(seed.to_hex(), "00ff");
    }

    #[test]
    fn test_golden_seed() {
        let digest = golden_digest();
        let seed = SeedDeriver::new().derive(&digest);

        assert_eq!(seed.to_hex(), digest.to_hex());
        assert_eq!(seed.to_decimal(), GOLDEN_DECIMAL);
        assert_eq!(seed.width(), 20);
        assert!(seed.bits() <= 160);
    }

    #[test]
    fn test_rng_key_left_padded() {
        let digest = golden_digest();
        let key = Seed::from_digest(&digest).rng_key();

        assert_eq!(&key[..12], &[0u8; 12]);
        assert_eq!(&key[12..], digest.as_bytes());
    }

    #[test]
    fn test_parse_decimal_and_hex_agree() {
        let from_decimal: Seed = GOLDEN_DECIMAL.parse().unwrap();
        let from_hex: Seed = "0xf9ccd7655bc00491a98bc8b3a59ac87c19f1f7e0".parse().unwrap();

        assert_eq!(from_decimal, from_hex);
        assert_eq!(from_decimal, Seed::from_digest(&golden_digest()));
    }

    #[test]
    fn test_zero_seed() {
        let seed: Seed = "0".parse().unwrap();
        assert_eq!(seed.to_decimal(), "0");
        assert_eq!(seed.bits(), 0);
        assert_eq!(seed.to_hex(), "00");
    }

    #[test]
    fn test_max_seed() {
        let max = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        let seed: Seed = max.parse().unwrap();

        assert_eq!(seed.rng_key(), [0xFF; SEED_BYTES]);
        assert_eq!(seed.to_decimal(), max);
    }

    #[test]
    fn test_too_large_rejected() {
        let over = "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        assert_eq!(over.parse::<Seed>(), Err(SeedError::TooLarge));
        assert_eq!(Seed::from_be_bytes(&[1u8; 33]), Err(SeedError::TooLarge));

        let mut padded = vec![0u8; 8];
        padded.extend_from_slice(&[0xAB; 32]);
        assert!(Seed::from_be_bytes(&padded).is_ok());
    }

    #[test]
    fn test_wide_input_keeps_low_bytes() {
        let mut wide = vec![0x11; 8];
        wide.extend_from_slice(&[0xAB; 32]);

        let seed = Seed::from_be_slice(&wide);

        assert_eq!(seed.rng_key(), [0xAB; SEED_BYTES]);
        assert_eq!(seed.width(), SEED_BYTES);
    }

    #[test]
    fn test_invalid_text_rejected() {
        assert!(matches!("12a".parse::<Seed>(), Err(SeedError::Parse(_))));
        assert!(matches!("0xzz".parse::<Seed>(), Err(SeedError::Parse(_))));
        assert!(matches!("".parse::<Seed>(), Err(SeedError::Parse(_))));
    }

    #[test]
    fn test_odd_length_hex() {
        let seed: Seed = "0xfff".parse().unwrap();
        assert_eq!(seed.to_decimal(), "4095");
    }
}

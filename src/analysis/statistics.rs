//! Byte-level statistics over an entropy artifact.
//!
//! Compressed image formats sit close to 8 bits of Shannon entropy per
//! byte. Blank frames, zero-filled files, and captures truncated into
//! long padding runs show up as low entropy, one dominant byte value, or
//! a single very long run.

use crate::source::EntropySample;
use serde::Serialize;

/// Histogram-derived statistics for one artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleStatistics {
    /// Shannon entropy of the byte histogram, in bits per byte (0.0 to 8.0).
    pub entropy_bits_per_byte: f64,
    /// Most frequent byte value.
    pub dominant_byte: u8,
    /// Share of the artifact taken by `dominant_byte` (0.0 to 1.0).
    pub dominant_share: f64,
    /// Length of the longest run of one repeated byte.
    pub longest_run: usize,
    /// Number of bytes analyzed.
    pub sample_size: usize,
}

impl SampleStatistics {
    /// Computes statistics over the sample content.
    pub fn analyze(sample: &EntropySample) -> Self {
        Self::analyze_bytes(sample.data())
    }

    /// Computes statistics over a raw byte slice.
    pub fn analyze_bytes(data: &[u8]) -> Self {
        let mut histogram = [0usize; 256];
        for &byte in data {
            histogram[byte as usize] += 1;
        }

        let (dominant_byte, dominant_count) = histogram
            .iter()
            .enumerate()
            .max_by_key(|&(value, &count)| (count, std::cmp::Reverse(value)))
            .map(|(value, &count)| (value as u8, count))
            .unwrap_or((0, 0));

        let n = data.len();
        Self {
            entropy_bits_per_byte: shannon_entropy(&histogram, n),
            dominant_byte,
            dominant_share: if n == 0 { 0.0 } else { dominant_count as f64 / n as f64 },
            longest_run: longest_run(data),
            sample_size: n,
        }
    }
}

fn shannon_entropy(histogram: &[usize; 256], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    histogram
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            p * (1.0 / p).log2()
        })
        .sum()
}

fn longest_run(data: &[u8]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;

    for &byte in data {
        if previous == Some(byte) {
            current += 1;
        } else {
            current = 1;
            previous = Some(byte);
        }
        longest = longest.max(current);
    }

    longest
}

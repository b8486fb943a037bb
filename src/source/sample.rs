//! Entropy sample type holding the raw artifact content.

/// The full raw content of an entropy artifact.
///
/// Constructed only through [`EntropySample::new`], which rejects empty
/// content, so every sample in circulation carries at least one byte.
#[derive(Clone, PartialEq, Eq)]
pub struct EntropySample {
    /// Raw artifact bytes.
    data: Vec<u8>,
    /// Where the bytes came from (a path or a label), for diagnostics.
    origin: String,
}

impl EntropySample {
    /// Creates a sample, returning `None` if `data` is empty.
    pub fn new(data: Vec<u8>, origin: impl Into<String>) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        Some(Self {
            data,
            origin: origin.into(),
        })
    }

    /// Returns the raw bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the origin label.
    #[inline]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the number of bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the sample holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl std::fmt::Debug for EntropySample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntropySample")
            .field("origin", &self.origin)
            .field("bytes", &self.data.len())
            .finish()
    }
}

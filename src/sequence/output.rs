//! Generated output sequence.

/// An ordered, immutable sequence of integers drawn from `[low, high)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSequence {
    values: Vec<i64>,
    low: i64,
    high: i64,
}

impl OutputSequence {
    pub(crate) fn new(values: Vec<i64>, low: i64, high: i64) -> Self {
        debug_assert!(values.iter().all(|v| (low..high).contains(v)));
        Self { values, low, high }
    }

    /// Returns the values in draw order.
    #[inline]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn low(&self) -> i64 {
        self.low
    }

    /// Returns the exclusive upper bound.
    #[inline]
    pub fn high(&self) -> i64 {
        self.high
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the sequence holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the values in draw order.
    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.values.iter()
    }

    /// Consumes the sequence, returning the values.
    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }
}

impl AsRef<[i64]> for OutputSequence {
    fn as_ref(&self) -> &[i64] {
        &self.values
    }
}

impl IntoIterator for OutputSequence {
    type Item = i64;
    type IntoIter = std::vec::IntoIter<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a OutputSequence {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

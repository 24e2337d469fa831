//! Index-level column combinations.
//!
//! A [`ColumnCombination`] is a set of column indices backed by a
//! [`BitVector`], together with a cached cardinality. The cached size is part
//! of the observable state: equality and hashing cover both the bits and the
//! size. Every mutator keeps `size == bits.popcount()`, and neither field is
//! reachable from outside the crate, so the pair cannot drift apart.
//!
//! Set algebra lives in [`algebra`][crate::algebra], enumeration of subset
//! and superset families in [`enumerate`][crate::enumerate].

use std::cmp::Ordering;

use crate::bitset::{BitVector, Ones};

/// A set of column indices.
///
/// # Examples
///
/// ```
/// use colset_rs::combination::ColumnCombination;
///
/// let mut cc = ColumnCombination::from_columns([0, 3]);
/// assert_eq!(cc.size(), 2);
///
/// cc.add_column(64);
/// assert!(cc.test_bit(64));
/// assert_eq!(cc.set_bits(), vec![0, 3, 64]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ColumnCombination {
    pub(crate) bits: BitVector,
    pub(crate) size: usize,
}

impl ColumnCombination {
    /// Creates an empty combination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a combination containing the given column indices.
    pub fn from_columns(columns: impl IntoIterator<Item = usize>) -> Self {
        let mut cc = Self::new();
        for column in columns {
            cc.add_column(column);
        }
        cc
    }

    /// Creates a combination from a raw bit vector.
    pub fn from_bits(bits: BitVector) -> Self {
        let size = bits.popcount();
        Self { bits, size }
    }

    /// Creates the combination `{0, 1, ..., dimension - 1}`.
    pub fn full(dimension: usize) -> Self {
        let mut cc = Self::new();
        cc.set_all_bits(dimension);
        cc
    }

    /// Read-only view of the backing bits.
    pub fn bits(&self) -> &BitVector {
        &self.bits
    }

    /// Consumes the combination, returning its bits.
    pub fn into_bits(self) -> BitVector {
        self.bits
    }

    /// Number of columns in the combination.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the combination has no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns true if `column` is in the combination.
    #[inline]
    pub fn test_bit(&self, column: usize) -> bool {
        self.bits.get(column)
    }

    /// Adds a column, growing the backing storage as needed.
    pub fn add_column(&mut self, column: usize) -> &mut Self {
        if self.bits.set(column) {
            self.size += 1;
        }
        self
    }

    /// Removes a column. Removing an absent column is a no-op.
    pub fn remove_column(&mut self, column: usize) -> &mut Self {
        if self.bits.clear(column) {
            self.size -= 1;
        }
        self
    }

    /// Replaces the backing bits with a copy of `bits`.
    pub fn set_columns(&mut self, bits: &BitVector) -> &mut Self {
        self.bits = bits.clone();
        self.size = self.bits.popcount();
        self
    }

    /// Clears every column, then sets columns `0..dimension`.
    pub fn set_all_bits(&mut self, dimension: usize) -> &mut Self {
        self.bits.clear_all();
        self.bits.set_range(dimension);
        self.size = dimension;
        self
    }

    /// Indices of the columns in this combination, ascending.
    pub fn set_bits(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }

    /// Indices in `[0, max)` that are not in this combination, ascending.
    pub fn cleared_bits(&self, max: usize) -> Vec<usize> {
        self.bits.iter_zeros(max).collect()
    }

    /// Iterator over the columns in this combination, ascending.
    pub fn columns(&self) -> Ones<'_> {
        self.bits.iter_ones()
    }
}

impl From<BitVector> for ColumnCombination {
    fn from(bits: BitVector) -> Self {
        Self::from_bits(bits)
    }
}

impl From<&[usize]> for ColumnCombination {
    fn from(columns: &[usize]) -> Self {
        Self::from_columns(columns.iter().copied())
    }
}

impl<const N: usize> From<[usize; N]> for ColumnCombination {
    fn from(columns: [usize; N]) -> Self {
        Self::from_columns(columns)
    }
}

impl FromIterator<usize> for ColumnCombination {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_columns(iter)
    }
}

impl Extend<usize> for ColumnCombination {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for column in iter {
            self.add_column(column);
        }
    }
}

impl PartialOrd for ColumnCombination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Smaller combinations first; equal sizes compare by their ascending column lists.
impl Ord for ColumnCombination {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size.cmp(&other.size).then_with(|| self.columns().cmp(other.columns()))
    }
}

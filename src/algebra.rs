//! Set algebra over column combinations.
//!
//! All operations here are pure: they never modify their receiver or their
//! arguments, and results carry a freshly computed size.

use std::ops::{BitAnd, BitOr, Sub};

use crate::combination::ColumnCombination;

impl ColumnCombination {
    /// Columns in `self` or `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self::from_bits(self.bits.or(&other.bits))
    }

    /// Columns in both `self` and `other`.
    pub fn intersect(&self, other: &Self) -> Self {
        Self::from_bits(self.bits.and(&other.bits))
    }

    /// Columns in `self` but not in `other`.
    pub fn minus(&self, other: &Self) -> Self {
        Self::from_bits(self.bits.and_not(&other.bits))
    }

    /// Returns true if every column of `other` is in `self`.
    ///
    /// Holds for `other == self` and for the empty combination.
    pub fn contains_subset(&self, other: &Self) -> bool {
        other.size <= self.size && other.bits.is_subset_of(&self.bits)
    }

    /// Like [`contains_subset`][Self::contains_subset], but excludes `other == self`.
    pub fn contains_real_subset(&self, other: &Self) -> bool {
        self.contains_subset(other) && self != other
    }

    /// Returns true if every column of `self` is in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        other.contains_subset(self)
    }

    /// Like [`is_subset_of`][Self::is_subset_of], but excludes `other == self`.
    pub fn is_real_subset_of(&self, other: &Self) -> bool {
        other.contains_real_subset(self)
    }

    /// Returns true if `self` and `other` share a column.
    pub fn intersects(&self, other: &Self) -> bool {
        self.bits.intersects(&other.bits)
    }
}

impl BitOr for &ColumnCombination {
    type Output = ColumnCombination;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitAnd for &ColumnCombination {
    type Output = ColumnCombination;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl Sub for &ColumnCombination {
    type Output = ColumnCombination;

    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(rhs)
    }
}

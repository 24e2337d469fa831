//! Growable bit vector backing column combinations.
//!
//! Bits live in a vector of `u64` words. The vector grows in whole words when
//! a bit beyond the current capacity is set; bits past the last allocated word
//! read as zero. Equality and hashing look only at the set bits, so two vectors
//! that differ just in trailing zero words are equal.

use std::hash::{Hash, Hasher};

/// A growable bit vector backed by a vector of u64 words.
#[derive(Debug, Clone, Default)]
pub struct BitVector {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
}

impl BitVector {
    /// Number of bits per word.
    pub const BITS_PER_WORD: usize = 64;

    /// Creates an empty bit vector with no pre-allocated capacity.
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Creates an empty bit vector with room for at least `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: vec![0; Self::words_for(bits)],
        }
    }

    /// Creates a bit vector directly from its backing words.
    pub fn from_words(words: Vec<u64>) -> Self {
        Self { words }
    }

    #[inline]
    fn words_for(bits: usize) -> usize {
        bits.div_ceil(Self::BITS_PER_WORD)
    }

    /// Gets the word index and bit mask for a given bit index.
    #[inline]
    fn word_and_mask(index: usize) -> (usize, u64) {
        let word = index / Self::BITS_PER_WORD;
        let bit = index % Self::BITS_PER_WORD;
        (word, 1u64 << bit)
    }

    /// Returns the backing words.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Returns the number of allocated words.
    #[inline]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Returns the capacity in bits.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len() * Self::BITS_PER_WORD
    }

    /// Ensures the vector can hold at least `bits` bits.
    pub fn reserve(&mut self, bits: usize) {
        let needed = Self::words_for(bits);
        if needed > self.words.len() {
            self.words.resize(needed, 0);
        }
    }

    /// Returns true if the bit at the given index is set.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        let (word_idx, mask) = Self::word_and_mask(index);
        match self.words.get(word_idx) {
            Some(word) => word & mask != 0,
            None => false,
        }
    }

    /// Sets the bit at the given index, growing if necessary.
    /// Returns true if the bit was not previously set.
    #[inline]
    pub fn set(&mut self, index: usize) -> bool {
        let (word_idx, mask) = Self::word_and_mask(index);

        // Grow if necessary
        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }

        let word = &mut self.words[word_idx];
        let was_clear = *word & mask == 0;
        *word |= mask;
        was_clear
    }

    /// Clears the bit at the given index. Returns true if the bit was previously set.
    ///
    /// Clearing past the allocated words is a no-op.
    #[inline]
    pub fn clear(&mut self, index: usize) -> bool {
        let (word_idx, mask) = Self::word_and_mask(index);
        let Some(word) = self.words.get_mut(word_idx) else {
            return false;
        };
        let was_set = *word & mask != 0;
        *word &= !mask;
        was_set
    }

    /// Clears all bits, keeping the allocation.
    pub fn clear_all(&mut self) {
        for word in &mut self.words {
            *word = 0;
        }
    }

    /// Sets bits `0..n`.
    pub fn set_range(&mut self, n: usize) {
        self.reserve(n);
        let full = n / Self::BITS_PER_WORD;
        for word in &mut self.words[..full] {
            *word = u64::MAX;
        }
        let rest = n % Self::BITS_PER_WORD;
        if rest != 0 {
            self.words[full] |= (1u64 << rest) - 1;
        }
    }

    /// Returns the number of set bits.
    pub fn popcount(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_clear(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns the index of the highest set bit, if any.
    pub fn last_set(&self) -> Option<usize> {
        let (i, w) = self.words.iter().enumerate().rev().find(|(_, w)| **w != 0)?;
        Some(i * Self::BITS_PER_WORD + (Self::BITS_PER_WORD - 1 - w.leading_zeros() as usize))
    }

    /// Number of words up to and including the last non-zero one.
    fn significant_words(&self) -> usize {
        self.words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
    }

    fn zip_with(&self, other: &Self, len: usize, f: impl Fn(u64, u64) -> u64) -> Self {
        let word = |v: &Self, i: usize| v.words.get(i).copied().unwrap_or(0);
        let words = (0..len).map(|i| f(word(self, i), word(other, i))).collect();
        Self { words }
    }

    /// Bitwise AND into a new vector.
    pub fn and(&self, other: &Self) -> Self {
        self.zip_with(other, self.words.len().min(other.words.len()), |a, b| a & b)
    }

    /// Bitwise OR into a new vector.
    pub fn or(&self, other: &Self) -> Self {
        self.zip_with(other, self.words.len().max(other.words.len()), |a, b| a | b)
    }

    /// Bitwise AND NOT (`self & !other`) into a new vector.
    pub fn and_not(&self, other: &Self) -> Self {
        self.zip_with(other, self.words.len(), |a, b| a & !b)
    }

    /// In-place AND.
    pub fn and_assign(&mut self, other: &Self) {
        for (i, word) in self.words.iter_mut().enumerate() {
            *word &= other.words.get(i).copied().unwrap_or(0);
        }
    }

    /// In-place OR, growing to fit `other`.
    pub fn or_assign(&mut self, other: &Self) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (word, &o) in self.words.iter_mut().zip(&other.words) {
            *word |= o;
        }
    }

    /// In-place AND NOT.
    pub fn and_not_assign(&mut self, other: &Self) {
        for (word, &o) in self.words.iter_mut().zip(&other.words) {
            *word &= !o;
        }
    }

    /// Returns true if every set bit of `self` is also set in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.words
            .iter()
            .enumerate()
            .all(|(i, &w)| w & !other.words.get(i).copied().unwrap_or(0) == 0)
    }

    /// Returns true if `self` and `other` share at least one set bit.
    pub fn intersects(&self, other: &Self) -> bool {
        self.words.iter().zip(&other.words).any(|(&a, &b)| a & b != 0)
    }

    /// Returns an iterator over all set bit indices, ascending.
    pub fn iter_ones(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Returns an iterator over the cleared bit indices in `[0, max)`, ascending.
    pub fn iter_zeros(&self, max: usize) -> impl Iterator<Item = usize> + '_ {
        (0..max).filter(move |&i| !self.get(i))
    }
}

impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        let n = self.significant_words();
        n == other.significant_words() && self.words[..n] == other.words[..n]
    }
}

impl Eq for BitVector {}

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.words[..self.significant_words()].hash(state);
    }
}

impl FromIterator<usize> for BitVector {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bits = BitVector::new();
        for index in iter {
            bits.set(index);
        }
        bits
    }
}

/// Iterator over set bits in a BitVector.
#[derive(Debug, Clone)]
pub struct Ones<'a> {
    words: &'a [u64],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(self.word_idx * BitVector::BITS_PER_WORD + bit_idx);
            }

            self.word_idx += 1;
            if self.word_idx >= self.words.len() {
                return None;
            }
            self.current_word = self.words[self.word_idx];
        }
    }
}

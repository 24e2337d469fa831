//! Enumeration of subset and superset families.
//!
//! Profiling algorithms walk the lattice of column combinations level by
//! level. This module generates the families they need:
//!
//! - direct subsets and supersets (one column removed or added),
//! - all subsets of a fixed size (`C(size, n)`),
//! - all proper subsets,
//! - the bounded family of size-`n` combinations lying between a `base` and a
//!   `superset`.
//!
//! Every family is produced lazily. The iterators are `Clone`, so a family can
//! be restarted by cloning the iterator before consuming it; nothing is
//! materialized until the caller collects.
//!
//! ## Top-down vs bottom-up
//!
//! The bounded family `{ X : base ⊆ X ⊆ superset, |X| = n }` can be built two
//! ways. Top-down removes `|superset| - n` free columns from `superset`;
//! bottom-up adds `n - |base|` free columns to `base`. Both choose from the
//! same pool of free columns (`superset \ base`), and `C(f, k) = C(f, f - k)`,
//! so they yield the same family. They differ in how many columns each
//! produced combination has to be edited by. [`Strategy::select`] picks the
//! smaller step count, defaulting to bottom-up on ties.

use std::fmt;

use log::debug;
use num_bigint::BigUint;

use crate::combination::ColumnCombination;

/// How a bounded superset family is generated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// `n` is out of bounds (or `base` is not inside `superset`): nothing to generate.
    Empty,
    /// `n == |superset|`: the family is exactly `[superset]`.
    Singleton,
    /// Remove columns from `superset`.
    TopDown,
    /// Add columns to `base`.
    BottomUp,
}

impl Strategy {
    /// Picks the strategy for the size-`n` family between a base of size
    /// `base_size` and a superset of size `superset_size`.
    pub fn select(base_size: usize, superset_size: usize, n: usize) -> Self {
        if n > superset_size || n < base_size {
            Strategy::Empty
        } else if n == superset_size {
            Strategy::Singleton
        } else if superset_size - n < n - base_size {
            Strategy::TopDown
        } else {
            Strategy::BottomUp
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Empty => "empty",
            Strategy::Singleton => "singleton",
            Strategy::TopDown => "top-down",
            Strategy::BottomUp => "bottom-up",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Edit {
    Add,
    Remove,
}

/// Lazy family of combinations obtained by editing a seed combination with
/// every `k`-subset of a pool of columns.
///
/// Each item is either `seed ∪ chosen` (bottom-up) or `seed \ chosen`
/// (top-down). The `k`-subsets are visited in lexicographic order of
/// their positions in the pool.
#[derive(Debug, Clone)]
pub struct Combinations {
    seed: ColumnCombination,
    pool: Vec<usize>,
    edit: Edit,
    /// Strictly increasing positions into `pool`; `None` once exhausted.
    cursor: Option<Vec<usize>>,
    /// Items left, if it fits in `usize`.
    remaining: Option<usize>,
}

impl Combinations {
    fn new(seed: ColumnCombination, pool: Vec<usize>, k: usize, edit: Edit) -> Self {
        let cursor = if k <= pool.len() { Some((0..k).collect()) } else { None };
        let remaining = if k <= pool.len() { binomial_usize(pool.len(), k) } else { Some(0) };
        Self {
            seed,
            pool,
            edit,
            cursor,
            remaining,
        }
    }

    /// A family with no members.
    pub fn empty() -> Self {
        Self {
            seed: ColumnCombination::new(),
            pool: Vec::new(),
            edit: Edit::Add,
            cursor: None,
            remaining: Some(0),
        }
    }

    /// A family with exactly one member.
    pub fn single(cc: ColumnCombination) -> Self {
        Self::new(cc, Vec::new(), 0, Edit::Add)
    }
}

fn edited(seed: &ColumnCombination, pool: &[usize], edit: Edit, positions: &[usize]) -> ColumnCombination {
    let mut cc = seed.clone();
    for &p in positions {
        match edit {
            Edit::Add => cc.add_column(pool[p]),
            Edit::Remove => cc.remove_column(pool[p]),
        };
    }
    cc
}

impl Iterator for Combinations {
    type Item = ColumnCombination;

    fn next(&mut self) -> Option<Self::Item> {
        let positions = self.cursor.as_mut()?;
        let item = edited(&self.seed, &self.pool, self.edit, positions);

        // Advance to the next k-subset of positions.
        let n = self.pool.len();
        let k = positions.len();
        match (0..k).rev().find(|&i| positions[i] != i + n - k) {
            Some(i) => {
                positions[i] += 1;
                for j in i + 1..k {
                    positions[j] = positions[j - 1] + 1;
                }
            }
            None => self.cursor = None,
        }

        if let Some(r) = self.remaining.as_mut() {
            *r -= 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Combinations {}

// ========================================================================
// Direct subsets and supersets
// ========================================================================

impl ColumnCombination {
    /// One singleton combination per column.
    pub fn contained_one_column_combinations(&self) -> impl Iterator<Item = ColumnCombination> + Clone + '_ {
        self.columns().map(|column| ColumnCombination::from([column]))
    }

    /// One combination per column, with exactly that column removed.
    pub fn direct_subsets(&self) -> impl Iterator<Item = ColumnCombination> + Clone + '_ {
        self.columns().map(move |column| {
            let mut subset = self.clone();
            subset.remove_column(column);
            subset
        })
    }

    /// One combination per column in `[0, max_columns)` missing from `self`,
    /// with exactly that column added.
    pub fn direct_supersets(&self, max_columns: usize) -> impl Iterator<Item = ColumnCombination> + Clone + '_ {
        (0..max_columns).filter(move |&c| !self.test_bit(c)).map(move |column| {
            let mut superset = self.clone();
            superset.add_column(column);
            superset
        })
    }

    /// Like [`direct_supersets`][Self::direct_supersets], but only adds
    /// columns of `max_combination`.
    pub fn direct_supersets_within(&self, max_combination: &ColumnCombination) -> Combinations {
        Combinations::new(self.clone(), max_combination.minus(self).set_bits(), 1, Edit::Add)
    }
}

// ========================================================================
// Fixed-size subsets
// ========================================================================

impl ColumnCombination {
    /// All subsets with exactly `n` columns.
    ///
    /// Empty when `n > self.size()`; `[{}]` when `n == 0`.
    pub fn n_subsets(&self, n: usize) -> Combinations {
        debug!("n_subsets({}, n = {})", self, n);
        Combinations::new(ColumnCombination::new(), self.set_bits(), n, Edit::Add)
    }

    /// All proper subsets, including the empty combination, largest first.
    ///
    /// The empty combination has no proper subsets.
    pub fn all_subsets(&self) -> impl Iterator<Item = ColumnCombination> + Clone + '_ {
        debug!("all_subsets({})", self);
        (0..self.size()).rev().flat_map(move |n| self.n_subsets(n))
    }

    /// Number of subsets with exactly `n` columns.
    pub fn count_n_subsets(&self, n: usize) -> BigUint {
        binomial(self.size(), n)
    }
}

// ========================================================================
// Bounded superset families
// ========================================================================

impl ColumnCombination {
    /// Strategy [`n_subsets_superset_of`][Self::n_subsets_superset_of] uses
    /// for the given `base` and `n`, with `self` as the superset.
    pub fn superset_strategy(&self, base: &ColumnCombination, n: usize) -> Strategy {
        if !self.contains_subset(base) {
            return Strategy::Empty;
        }
        Strategy::select(base.size(), self.size(), n)
    }

    /// All size-`n` combinations that contain `base` and are contained in `self`.
    ///
    /// Empty when `n` lies outside `[base.size(), self.size()]` or when `base`
    /// is not a subset of `self`; `[self]` when `n == self.size()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use colset_rs::combination::ColumnCombination;
    ///
    /// let superset = ColumnCombination::from([0, 2, 3, 4]);
    /// let base = ColumnCombination::from([2, 3]);
    ///
    /// let mut family: Vec<_> = superset.n_subsets_superset_of(&base, 3).collect();
    /// family.sort();
    /// assert_eq!(family, vec![ColumnCombination::from([0, 2, 3]), ColumnCombination::from([2, 3, 4])]);
    /// ```
    pub fn n_subsets_superset_of(&self, base: &ColumnCombination, n: usize) -> Combinations {
        let strategy = self.superset_strategy(base, n);
        debug!("n_subsets_superset_of({}, {}, n = {}) via {}", self, base, n, strategy);

        match strategy {
            Strategy::Empty => Combinations::empty(),
            Strategy::Singleton => Combinations::single(self.clone()),
            Strategy::TopDown => self.n_subsets_superset_of_top_down(base, n),
            Strategy::BottomUp => self.n_subsets_superset_of_bottom_up(base, n),
        }
    }

    /// Top-down generation: removes `self.size() - n` columns outside `base` from `self`.
    pub fn n_subsets_superset_of_top_down(&self, base: &ColumnCombination, n: usize) -> Combinations {
        if !self.bounds_family(base, n) {
            return Combinations::empty();
        }
        let pool = self.minus(base).set_bits();
        Combinations::new(self.clone(), pool, self.size() - n, Edit::Remove)
    }

    /// Bottom-up generation: adds `n - base.size()` columns of `self \ base` to `base`.
    pub fn n_subsets_superset_of_bottom_up(&self, base: &ColumnCombination, n: usize) -> Combinations {
        if !self.bounds_family(base, n) {
            return Combinations::empty();
        }
        let pool = self.minus(base).set_bits();
        Combinations::new(base.clone(), pool, n - base.size(), Edit::Add)
    }

    /// Number of size-`n` combinations between `base` and `self`.
    pub fn count_n_subsets_superset_of(&self, base: &ColumnCombination, n: usize) -> BigUint {
        if !self.bounds_family(base, n) {
            return BigUint::ZERO;
        }
        binomial(self.size() - base.size(), n - base.size())
    }

    fn bounds_family(&self, base: &ColumnCombination, n: usize) -> bool {
        base.size() <= n && n <= self.size() && self.contains_subset(base)
    }
}

/// Binomial coefficient `C(n, k)`.
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::ZERO;
    }
    let k = k.min(n - k);
    let mut result = BigUint::from(1u64);
    for i in 0..k {
        result *= BigUint::from((n - i) as u64);
        result /= BigUint::from((i + 1) as u64);
    }
    result
}

/// `C(n, k)` if it fits in `usize`.
fn binomial_usize(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 0..k {
        // Exact at every step: result * (n - i) is divisible by i + 1.
        // The product of two usize values always fits in u128.
        let step = result as u128 * (n - i) as u128 / (i + 1) as u128;
        result = usize::try_from(step).ok()?;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use test_log::test;

    fn cc(columns: &[usize]) -> ColumnCombination {
        ColumnCombination::from(columns)
    }

    fn sorted(iter: impl Iterator<Item = ColumnCombination>) -> Vec<ColumnCombination> {
        let mut v: Vec<_> = iter.collect();
        v.sort();
        v
    }

    #[test]
    fn test_strategy_select() {
        assert_eq!(Strategy::select(1, 6, 4), Strategy::TopDown);
        assert_eq!(Strategy::select(1, 6, 3), Strategy::BottomUp);
        // Tie: 6 - 4 == 4 - 2
        assert_eq!(Strategy::select(2, 6, 4), Strategy::BottomUp);
        assert_eq!(Strategy::select(1, 6, 6), Strategy::Singleton);
        assert_eq!(Strategy::select(1, 6, 7), Strategy::Empty);
        assert_eq!(Strategy::select(2, 6, 1), Strategy::Empty);
        assert_eq!(Strategy::select(0, 0, 0), Strategy::Singleton);
    }

    #[test]
    fn test_superset_strategy() {
        let abcdeg = cc(&[0, 1, 2, 3, 4, 6]);
        let c = cc(&[2]);
        assert_eq!(abcdeg.superset_strategy(&c, 4), Strategy::TopDown);
        assert_eq!(abcdeg.superset_strategy(&c, 3), Strategy::BottomUp);
        assert_eq!(abcdeg.superset_strategy(&cc(&[5]), 3), Strategy::Empty);
    }

    #[test]
    fn test_contained_one_column_combinations() {
        let combination = cc(&[0, 2, 3, 4]);
        assert_eq!(
            sorted(combination.contained_one_column_combinations()),
            vec![cc(&[0]), cc(&[2]), cc(&[3]), cc(&[4])]
        );
    }

    #[test]
    fn test_direct_subsets() {
        let combination = cc(&[0, 2, 3, 4]);
        let subsets = sorted(combination.direct_subsets());
        assert_eq!(subsets, vec![cc(&[0, 2, 3]), cc(&[0, 2, 4]), cc(&[0, 3, 4]), cc(&[2, 3, 4])]);
        assert!(subsets.iter().all(|s| s.size() == 3));
        assert_eq!(combination, cc(&[0, 2, 3, 4]));
    }

    #[test]
    fn test_direct_supersets() {
        let combination = cc(&[0, 2, 3, 4]);
        let supersets = sorted(combination.direct_supersets(7));
        assert_eq!(supersets, vec![cc(&[0, 1, 2, 3, 4]), cc(&[0, 2, 3, 4, 5]), cc(&[0, 2, 3, 4, 6])]);
        assert!(supersets.iter().all(|s| s.size() == 5));
    }

    #[test]
    fn test_direct_supersets_within() {
        let combination = cc(&[0, 2, 3, 4]);
        let ceiling = cc(&[0, 1, 2, 3, 4, 100]);
        let supersets = sorted(combination.direct_supersets_within(&ceiling));
        assert_eq!(supersets, vec![cc(&[0, 1, 2, 3, 4]), cc(&[0, 2, 3, 4, 100])]);
    }

    #[test]
    fn test_n_subsets() {
        let superset = cc(&[0, 2, 3]);
        assert_eq!(sorted(superset.n_subsets(2)), vec![cc(&[0, 2]), cc(&[0, 3]), cc(&[2, 3])]);
        assert_eq!(sorted(superset.n_subsets(1)), vec![cc(&[0]), cc(&[2]), cc(&[3])]);
        assert_eq!(sorted(superset.n_subsets(0)), vec![cc(&[])]);
        assert_eq!(sorted(superset.n_subsets(3)), vec![superset.clone()]);
        assert!(superset.n_subsets(4).next().is_none());
    }

    #[test]
    fn test_n_subsets_size_hint() {
        let superset = cc(&[0, 1, 2, 3, 4]);
        let mut family = superset.n_subsets(2);
        assert_eq!(family.size_hint(), (10, Some(10)));
        family.next();
        assert_eq!(family.size_hint(), (9, Some(9)));
        assert_eq!(family.count(), 9);
    }

    #[test]
    fn test_n_subsets_restartable() {
        let family = cc(&[1, 5, 9, 70]).n_subsets(2);
        let first: Vec<_> = family.clone().collect();
        let second: Vec<_> = family.collect();
        assert_eq!(first.len(), 6);
        assert_eq!(first, second);
    }

    #[test]
    fn test_superset_family_restartable() {
        let superset = cc(&[0, 1, 3, 4, 6, 65, 66, 130]);
        let base = cc(&[3, 65]);

        // 8 - 7 < 7 - 2 picks top-down; 8 - 3 >= 3 - 2 picks bottom-up.
        for (n, strategy, expected) in [(7, Strategy::TopDown, 6), (3, Strategy::BottomUp, 6)] {
            assert_eq!(superset.superset_strategy(&base, n), strategy);
            let families = [
                superset.n_subsets_superset_of(&base, n),
                superset.n_subsets_superset_of_top_down(&base, n),
                superset.n_subsets_superset_of_bottom_up(&base, n),
            ];
            for mut family in families {
                family.next();
                let restarted = family.clone();
                let first: Vec<_> = family.collect();
                let second: Vec<_> = restarted.collect();
                assert_eq!(first.len(), expected - 1, "n = {}", n);
                assert_eq!(first, second, "n = {}", n);
            }
        }
    }

    #[test]
    fn test_all_subsets() {
        let combination = cc(&[0, 2, 3]);
        let expected = vec![
            cc(&[]),
            cc(&[0]),
            cc(&[2]),
            cc(&[3]),
            cc(&[0, 2]),
            cc(&[0, 3]),
            cc(&[2, 3]),
        ];
        let subsets = sorted(combination.all_subsets());
        assert_eq!(subsets, expected);

        let unique: HashSet<_> = subsets.iter().cloned().collect();
        assert_eq!(unique.len(), subsets.len());
    }

    #[test]
    fn test_all_subsets_empty() {
        assert!(ColumnCombination::new().all_subsets().next().is_none());
    }

    #[test]
    fn test_all_subsets_one_column() {
        let subsets: Vec<_> = cc(&[5]).all_subsets().collect();
        assert_eq!(subsets, vec![ColumnCombination::new()]);
    }

    #[test]
    fn test_n_subsets_superset_of() {
        let superset = cc(&[0, 2, 3, 4]);
        let base = cc(&[2, 3]);
        assert_eq!(
            sorted(superset.n_subsets_superset_of(&base, 3)),
            vec![cc(&[0, 2, 3]), cc(&[2, 3, 4])]
        );
    }

    #[test]
    fn test_n_subsets_superset_of_equal_size() {
        let superset = cc(&[0, 1]);
        let base = cc(&[1]);
        let family: Vec<_> = superset.n_subsets_superset_of(&base, 2).collect();
        assert_eq!(family, vec![superset]);
    }

    #[test]
    fn test_n_subsets_superset_of_inversed() {
        let abc = cc(&[0, 1, 2]);
        let b = cc(&[1]);
        let family: Vec<_> = abc.n_subsets_superset_of(&b, 2).collect();
        assert_eq!(family.len(), 2);
        assert!(family.contains(&cc(&[0, 1])));
        assert!(family.contains(&cc(&[1, 2])));
    }

    #[test]
    fn test_n_out_of_bounds() {
        let abcd = cc(&[0, 1, 2, 3]);
        let bc = cc(&[1, 2]);
        assert!(abcd.n_subsets_superset_of_top_down(&bc, 5).next().is_none());
        assert!(abcd.n_subsets_superset_of_top_down(&bc, 1).next().is_none());
        assert!(abcd.n_subsets_superset_of_bottom_up(&bc, 5).next().is_none());
        assert!(abcd.n_subsets_superset_of_bottom_up(&bc, 1).next().is_none());
        assert!(abcd.n_subsets_superset_of(&bc, 5).next().is_none());
        assert!(abcd.n_subsets_superset_of(&bc, 1).next().is_none());
    }

    #[test]
    fn test_n_at_bounds() {
        let abcd = cc(&[0, 1, 2, 3]);
        let bc = cc(&[1, 2]);
        let empty = ColumnCombination::new();

        let top_down: Vec<_> = abcd.n_subsets_superset_of_top_down(&empty, 4).collect();
        assert_eq!(top_down, vec![abcd.clone()]);
        let top_down: Vec<_> = abcd.n_subsets_superset_of_top_down(&bc, 2).collect();
        assert_eq!(top_down, vec![bc.clone()]);

        let bottom_up: Vec<_> = abcd.n_subsets_superset_of_bottom_up(&empty, 4).collect();
        assert_eq!(bottom_up, vec![abcd.clone()]);
        let bottom_up: Vec<_> = abcd.n_subsets_superset_of_bottom_up(&bc, 2).collect();
        assert_eq!(bottom_up, vec![bc]);
    }

    #[test]
    fn test_strategies_agree() {
        let superset = cc(&[0, 1, 3, 4, 6, 65, 66, 130]);
        let base = cc(&[3, 65]);
        for n in 0..=superset.size() + 1 {
            let top_down = sorted(superset.n_subsets_superset_of_top_down(&base, n));
            let bottom_up = sorted(superset.n_subsets_superset_of_bottom_up(&base, n));
            let chosen = sorted(superset.n_subsets_superset_of(&base, n));
            assert_eq!(top_down, bottom_up, "n = {}", n);
            assert_eq!(chosen, top_down, "n = {}", n);
            assert_eq!(
                superset.count_n_subsets_superset_of(&base, n),
                BigUint::from(chosen.len()),
                "n = {}",
                n
            );
            for x in &chosen {
                assert_eq!(x.size(), n);
                assert!(x.contains_subset(&base));
                assert!(x.is_subset_of(&superset));
            }
        }
    }

    #[test]
    fn test_base_outside_superset() {
        let superset = cc(&[0, 1, 2]);
        let base = cc(&[1, 7]);
        assert!(superset.n_subsets_superset_of(&base, 2).next().is_none());
        assert!(superset.n_subsets_superset_of_bottom_up(&base, 3).next().is_none());
        assert_eq!(superset.count_n_subsets_superset_of(&base, 2), BigUint::ZERO);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(5, 2), BigUint::from(10u32));
        assert_eq!(binomial(5, 0), BigUint::from(1u32));
        assert_eq!(binomial(5, 5), BigUint::from(1u32));
        assert_eq!(binomial(3, 4), BigUint::ZERO);
        assert_eq!(binomial(100, 50).to_string(), "100891344545564193334812497256");

        assert_eq!(binomial_usize(5, 2), Some(10));
        assert_eq!(binomial_usize(3, 4), Some(0));
        assert_eq!(binomial_usize(1000, 500), None);
    }

    #[test]
    fn test_binomial_usize_large_intermediate() {
        // C(67, 33) fits in u64 although result * (n - i) overflows on the way.
        assert_eq!(binomial_usize(67, 33), Some(14226520737620288370));
        assert_eq!(binomial(67, 33), BigUint::from(14226520737620288370u64));
        assert_eq!(binomial_usize(68, 34), None);

        let family = ColumnCombination::full(67).n_subsets(33);
        assert_eq!(family.size_hint(), (14226520737620288370, Some(14226520737620288370)));
    }

    #[test]
    fn test_count_n_subsets() {
        let wide = ColumnCombination::full(200);
        assert_eq!(wide.count_n_subsets(2), BigUint::from(19900u32));
        assert_eq!(wide.count_n_subsets(201), BigUint::ZERO);
    }

    #[test]
    fn test_large_family_size_hint_overflows() {
        let wide = ColumnCombination::full(1000);
        let family = wide.n_subsets(500);
        assert_eq!(family.size_hint(), (usize::MAX, None));
    }
}

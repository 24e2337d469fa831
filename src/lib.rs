//! # colset-rs: column-combination bitsets for data profiling
//!
//! **`colset-rs`** is a small set-algebra engine over sets of column indices.
//! It is built for data-profiling algorithms (functional dependency and unique
//! column combination discovery) that search the lattice of attribute subsets
//! of a relation with up to thousands of columns.
//!
//! ## What is a column combination?
//!
//! A column combination is a set of column indices of one relation, e.g.
//! `{0, 2, 3}` for the first, third and fourth column. Profiling algorithms
//! test candidate combinations level by level: all singletons, then all pairs
//! built from the surviving singletons, and so on. The lattice is exponential
//! in the number of columns, so the representation must be compact and the
//! candidate families must be generated without waste.
//!
//! ## Key Features
//!
//! - **Compact sets**: a [`ColumnCombination`][crate::combination::ColumnCombination] is a growable vector of `u64` words with a cached size.
//! - **Cheap algebra**: union, intersection, difference and containment work word by word.
//! - **Lazy families**: direct subsets/supersets, fixed-size subsets and bounded superset families are iterators; nothing is materialized until you collect.
//! - **Adaptive generation**: the bounded family `base ⊆ X ⊆ superset, |X| = n` is generated top-down or bottom-up, whichever needs fewer steps (see [`Strategy`][crate::enumerate::Strategy]).
//! - **Exact counts**: family sizes are available up front as [`BigUint`][num_bigint::BigUint], so callers can bound an enumeration before starting it.
//!
//! ## Basic Usage
//!
//! ```rust
//! use colset_rs::combination::ColumnCombination;
//! use colset_rs::enumerate::Strategy;
//!
//! // 1. Build combinations from column indices
//! let superset = ColumnCombination::from([0, 1, 2, 3, 4, 6]);
//! let base = ColumnCombination::from([2]);
//!
//! // 2. Set algebra
//! assert!(superset.contains_subset(&base));
//! assert_eq!(superset.minus(&base).size(), 5);
//!
//! // 3. All 4-column combinations between `base` and `superset`
//! assert_eq!(superset.superset_strategy(&base, 4), Strategy::TopDown);
//! let family: Vec<_> = superset.n_subsets_superset_of(&base, 4).collect();
//! assert_eq!(family.len(), 10);
//! assert!(family.iter().all(|x| x.size() == 4 && x.contains_subset(&base)));
//!
//! // 4. Translate to names
//! let names = ["a", "b", "c", "d", "e", "f", "g"];
//! assert_eq!(base.to_named("r", &names).to_string(), "r.c");
//! ```
//!
//! ## Core Components
//!
//! - **[`bitset`]**: the growable [`BitVector`][crate::bitset::BitVector].
//! - **[`combination`]**: [`ColumnCombination`][crate::combination::ColumnCombination] and its mutators.
//! - **[`algebra`]**: union, intersection, difference, subset predicates.
//! - **[`enumerate`]**: subset/superset families and strategy selection.
//! - **[`named`]**: mapping between index sets and named columns of a relation.
//!
//! ## Concurrency
//!
//! Combinations are plain values. Mutators take `&mut self`, everything else
//! takes `&self`, so sharing a combination across threads for reading is free
//! and mutating it requires a clone or a lock on the caller's side.

pub mod algebra;
pub mod bitset;
pub mod combination;
pub mod display;
pub mod enumerate;
pub mod named;

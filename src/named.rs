//! Named column combinations.
//!
//! Profiling results are reported in terms of relation and column names,
//! while the engine works on indices. A [`RelationSchema`] holds the name
//! table for one relation and translates in both directions. The index-level
//! types never see names.

use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use crate::combination::ColumnCombination;

/// A column of a relation, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnIdentifier {
    pub relation: String,
    pub column: String,
}

impl ColumnIdentifier {
    /// Creates the identifier of `column` in `relation`.
    pub fn new(relation: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            column: column.into(),
        }
    }
}

impl fmt::Display for ColumnIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.relation, self.column)
    }
}

/// A set of named columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamedColumnCombination {
    columns: BTreeSet<ColumnIdentifier>,
}

impl NamedColumnCombination {
    /// Creates an empty named combination.
    pub fn new() -> Self {
        Self::default()
    }

    /// The identifiers, ordered by relation and then column name.
    pub fn column_identifiers(&self) -> &BTreeSet<ColumnIdentifier> {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns true if `column` is part of the combination.
    pub fn contains(&self, column: &ColumnIdentifier) -> bool {
        self.columns.contains(column)
    }
}

impl FromIterator<ColumnIdentifier> for NamedColumnCombination {
    fn from_iter<I: IntoIterator<Item = ColumnIdentifier>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for NamedColumnCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", column)?;
        }
        Ok(())
    }
}

impl ColumnCombination {
    /// Maps every column index to `column_names[index]` of relation `relation_name`.
    ///
    /// # Panics
    ///
    /// Panics if an index has no entry in `column_names`.
    pub fn to_named<S: AsRef<str>>(&self, relation_name: &str, column_names: &[S]) -> NamedColumnCombination {
        self.columns()
            .map(|index| {
                assert!(
                    index < column_names.len(),
                    "Column index {} out of range for relation '{}' with {} columns",
                    index,
                    relation_name,
                    column_names.len()
                );
                ColumnIdentifier::new(relation_name, column_names[index].as_ref())
            })
            .collect()
    }
}

/// Name table of one relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationSchema {
    name: String,
    columns: Vec<String>,
}

impl RelationSchema {
    /// Creates the schema of relation `name` with the given ordered column names.
    pub fn new(name: impl Into<String>, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Relation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column names, indexed by column position.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns, i.e. the dimension for superset generation.
    pub fn dimension(&self) -> usize {
        self.columns.len()
    }

    /// All columns of the relation.
    pub fn all_columns(&self) -> ColumnCombination {
        ColumnCombination::full(self.dimension())
    }

    /// Position of the column called `column`, if any.
    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Named form of `cc`.
    pub fn to_named(&self, cc: &ColumnCombination) -> NamedColumnCombination {
        cc.to_named(&self.name, self.columns.as_slice())
    }

    /// Index form of the given column names, or `None` if a name is unknown.
    pub fn combination_of<S: AsRef<str>>(&self, columns: &[S]) -> Option<ColumnCombination> {
        let mut cc = ColumnCombination::new();
        for column in columns {
            let Some(index) = self.index_of(column.as_ref()) else {
                debug!("combination_of: unknown column '{}' in '{}'", column.as_ref(), self.name);
                return None;
            };
            cc.add_column(index);
        }
        Some(cc)
    }

    /// Index form of a named combination, or `None` if it mentions another
    /// relation or an unknown column.
    pub fn combination_from_named(&self, named: &NamedColumnCombination) -> Option<ColumnCombination> {
        let mut cc = ColumnCombination::new();
        for id in named.column_identifiers() {
            if id.relation != self.name {
                return None;
            }
            cc.add_column(self.index_of(&id.column)?);
        }
        Some(cc)
    }
}

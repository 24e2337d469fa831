//! Text forms of column combinations.
//!
//! `Display` lists the columns, `{0, 2, 3}`, and `FromStr` parses that form
//! back. `{:b}` renders the bit pattern with the highest column leftmost, so
//! `{0, 3}` prints as `1001`.

use std::fmt;
use std::str::FromStr;

use crate::combination::ColumnCombination;

impl fmt::Display for ColumnCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, column) in self.columns().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", column)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Binary for ColumnCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(last) = self.bits.last_set() else {
            return f.pad_integral(true, "0b", "0");
        };
        let pattern: String = (0..=last).rev().map(|i| if self.test_bit(i) { '1' } else { '0' }).collect();
        f.pad_integral(true, "0b", &pattern)
    }
}

/// Error returned when parsing a [`ColumnCombination`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCombinationError {
    /// Input is not wrapped in `{` and `}`.
    MissingBraces,
    /// An element is not a non-negative integer.
    InvalidColumn(String),
}

impl fmt::Display for ParseCombinationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCombinationError::MissingBraces => write!(f, "column combination must be enclosed in braces"),
            ParseCombinationError::InvalidColumn(s) => write!(f, "invalid column index '{}'", s),
        }
    }
}

impl std::error::Error for ParseCombinationError {}

impl FromStr for ColumnCombination {
    type Err = ParseCombinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or(ParseCombinationError::MissingBraces)?;

        let mut cc = ColumnCombination::new();
        if inner.trim().is_empty() {
            return Ok(cc);
        }
        for token in inner.split(',') {
            let token = token.trim();
            let column = token
                .parse::<usize>()
                .map_err(|_| ParseCombinationError::InvalidColumn(token.to_string()))?;
            cc.add_column(column);
        }
        Ok(cc)
    }
}

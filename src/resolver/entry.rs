// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Discovered entries and cursor direction.

use std::fmt;

/// One discovered integer logarithm of the target: `base^exponent == x`.
///
/// Entries are immutable once produced; the resolver hands out copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    /// The discovered base b, with |b| >= 2.
    pub base: i64,

    /// The exponent k >= 2 such that b^k equals the target.
    pub exponent: u32,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base: {}, exponent: {}", self.base, self.exponent)
    }
}

/// Direction the cursor moves after each candidate trial.
///
/// Ascending covers positive bases 2, 3, 4, ...; descending runs the
/// cursor downward through the negative bases -2, -3, -4, ... (the
/// degenerate candidates 1, 0 and -1 in between are counted as misses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Increment the cursor after each trial.
    #[default]
    Ascending,
    /// Decrement the cursor after each trial.
    Descending,
}

impl Direction {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Move a cursor one step in this direction.
    pub(crate) fn advance(self, cursor: i64) -> i64 {
        match self {
            Direction::Ascending => cursor + 1,
            Direction::Descending => cursor - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flipped() {
        assert_eq!(Direction::Ascending.flipped(), Direction::Descending);
        assert_eq!(Direction::Descending.flipped(), Direction::Ascending);
    }

    #[test]
    fn test_advance() {
        assert_eq!(Direction::Ascending.advance(2), 3);
        assert_eq!(Direction::Descending.advance(2), 1);
        assert_eq!(Direction::Descending.advance(-2), -3);
    }

    #[test]
    fn test_display() {
        let entry = LogEntry { base: 10, exponent: 6 };
        assert_eq!(entry.to_string(), "base: 10, exponent: 6");
    }
}

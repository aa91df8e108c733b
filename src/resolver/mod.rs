// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Stateful brute-force search over candidate bases.
//!
//! The resolver models a simple incremental-search state machine: a
//! cursor walks over candidate bases one step per trial, in a chosen
//! direction, and every trial is either a hit (the candidate is an exact
//! power root of the target) or a miss. Hits accumulate in discovery
//! order; both outcomes are counted.
//!
//! # Termination
//!
//! A sweep stops once the cursor is strictly past |x| / 2 (integer
//! division) on its side of zero. No base other than the target itself
//! can reach half the target's magnitude, with the sole exception of
//! base 2 for x = 4, and that candidate is tried before the bound can
//! trigger. Worst case a sweep tries O(x) candidates (prime targets
//! miss on all of them); each trial is O(log x) multiplications thanks
//! to the early exit in the power check.

pub mod entry;
pub mod errors;
pub mod statistics;

pub use entry::{Direction, LogEntry};
pub use errors::TargetError;
pub use statistics::{Counters, Statistics};

use crate::power::{self, MIN_TARGET_MAGNITUDE};
use log::{debug, trace};

/// Cursor value restored by every reset: the smallest valid base.
const CURSOR_START: i64 = 2;

/// Brute-force searcher for every (base, exponent) pair of one target.
///
/// Not designed for concurrent access; callers needing parallel searches
/// over different targets should use independent instances.
///
/// # Example
///
/// ```
/// use intlog_search::LogResolver;
///
/// let mut resolver = LogResolver::new(64)?;
/// let first = resolver.find_next().unwrap();
/// assert_eq!((first.base, first.exponent), (2, 6));
///
/// let second = resolver.find_next().unwrap();
/// assert_eq!((second.base, second.exponent), (4, 3));
/// # Ok::<(), intlog_search::TargetError>(())
/// ```
#[derive(Debug)]
pub struct LogResolver {
    /// Target value (x).
    x: i64,

    /// Current candidate base; never starts below 2 after a reset.
    cursor: i64,

    /// Cursor movement applied after each trial.
    direction: Direction,

    /// Every discovered entry so far, in discovery order.
    entries: Vec<LogEntry>,

    /// Hit/miss counters for the current session.
    statistics: Statistics,
}

impl LogResolver {
    /// Create a resolver for the given target.
    ///
    /// Fails with [`TargetError::InvalidTarget`] when |x| < 2; targets
    /// 0, 1 and -1 have no valid base and would never terminate in the
    /// power check.
    pub fn new(x: i64) -> Result<Self, TargetError> {
        let mut resolver = Self::default();
        resolver.set_target(x)?;
        Ok(resolver)
    }

    /// Replace the target, resetting all search state first.
    ///
    /// The reset happens whether or not validation passes, so a rejected
    /// call leaves the resolver fresh but still aimed at its previous
    /// target.
    pub fn set_target(&mut self, x: i64) -> Result<(), TargetError> {
        self.reset();

        if x.unsigned_abs() < MIN_TARGET_MAGNITUDE {
            return Err(TargetError::InvalidTarget(x));
        }

        self.x = x;
        Ok(())
    }

    /// Clear discovered entries, zero both counters, cursor back to 2.
    ///
    /// The direction flag survives a reset.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.statistics.clear();
        self.cursor = CURSOR_START;
    }

    /// Toggle between ascending and descending cursor movement.
    ///
    /// Affects only future trials; the cursor itself does not move.
    pub fn flip_direction(&mut self) {
        self.direction = self.direction.flipped();
    }

    /// Try the current cursor as a base of the target, then advance.
    ///
    /// A cursor whose magnitude has reached |x| is a miss without even
    /// running the power check (the target itself and anything beyond it
    /// are not interesting bases). Every call moves the cursor one step,
    /// so a search loop always makes progress in either direction.
    pub fn try_cursor(&mut self) -> Option<LogEntry> {
        if self.cursor.unsigned_abs() >= self.x.unsigned_abs() {
            self.tick(false);
            return None;
        }

        match power::exponent_of(self.cursor, self.x) {
            Some(exponent) => {
                let entry = LogEntry {
                    base: self.cursor,
                    exponent,
                };
                self.entries.push(entry);
                debug!("hit for target {}: {}", self.x, entry);
                self.tick(true);
                Some(entry)
            }
            None => {
                trace!("miss for target {}: base {}", self.x, self.cursor);
                self.tick(false);
                None
            }
        }
    }

    /// Sweep from the cursor to the next hit.
    ///
    /// Tries candidates until one hits or the cursor passes the sanity
    /// bound of |x| / 2, whichever comes first. Returns `None` once the
    /// bound is passed; further calls keep returning `None` until a
    /// reset.
    pub fn find_next(&mut self) -> Option<LogEntry> {
        loop {
            if let Some(entry) = self.try_cursor() {
                return Some(entry);
            }
            if self.past_bound() {
                return None;
            }
        }
    }

    /// Enumerate every hit for the target.
    ///
    /// Resets the session (counters included), then sweeps until the
    /// sanity bound is passed. Entries come back in discovery order:
    /// ascending base order under [`Direction::Ascending`], descending
    /// under [`Direction::Descending`].
    pub fn find_all(&mut self) -> Vec<LogEntry> {
        self.reset();

        while self.find_next().is_some() {}

        debug!(
            "search of {} complete: {} hits, {} misses",
            self.x,
            self.success_count(),
            self.failure_count()
        );

        self.entries.clone()
    }

    /// The current target value (x).
    pub fn target(&self) -> i64 {
        self.x
    }

    /// The current cursor movement direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Every entry discovered since the last reset, in discovery order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of candidate bases that hit since the last reset.
    pub fn success_count(&self) -> u64 {
        self.statistics.get(Counters::Hits)
    }

    /// Number of candidate bases rejected since the last reset.
    pub fn failure_count(&self) -> u64 {
        self.statistics.get(Counters::Misses)
    }

    /// Advance the cursor per direction and record the trial outcome.
    fn tick(&mut self, success: bool) {
        self.cursor = self.direction.advance(self.cursor);

        if success {
            self.statistics.increment(Counters::Hits);
        } else {
            self.statistics.increment(Counters::Misses);
        }
    }

    /// Whether the cursor is strictly past |x| / 2 on its side of zero.
    fn past_bound(&self) -> bool {
        // unsigned_abs() / 2 always fits in i64, even for i64::MIN
        let bound = (self.x.unsigned_abs() / 2) as i64;

        match self.direction {
            Direction::Ascending => self.cursor > bound,
            Direction::Descending => self.cursor < -bound,
        }
    }
}

impl Default for LogResolver {
    /// A resolver aimed at the smallest valid target, 2.
    fn default() -> Self {
        Self {
            x: CURSOR_START,
            cursor: CURSOR_START,
            direction: Direction::default(),
            entries: Vec::new(),
            statistics: Statistics::new(),
        }
    }
}

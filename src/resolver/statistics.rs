// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Hit/miss counters for a resolver session, incremented on every
//! candidate trial and cleared wholesale by a reset.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Candidate bases that turned out to be an exact power of the target.
    Hits,
    /// Candidate bases rejected, including the degenerate ones skipped
    /// on the way down through 1, 0 and -1.
    Misses,
}

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Zero every counter.
    pub(crate) fn clear(&mut self) {
        self.stats = [0; Counters::COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_get() {
        let mut statistics = Statistics::new();
        assert_eq!(statistics.get(Counters::Hits), 0);

        statistics.increment(Counters::Hits);
        statistics.increment(Counters::Misses);
        statistics.increment(Counters::Misses);

        assert_eq!(statistics.get(Counters::Hits), 1);
        assert_eq!(statistics.get(Counters::Misses), 2);
    }

    #[test]
    fn test_clear() {
        let mut statistics = Statistics::new();
        statistics.increment(Counters::Hits);
        statistics.clear();
        assert_eq!(statistics.get(Counters::Hits), 0);
        assert_eq!(statistics.get(Counters::Misses), 0);
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use intlog_search::LogEntry;

/// Flatten entries to plain (base, exponent) pairs for compact assertions.
pub fn pairs(entries: &[LogEntry]) -> Vec<(i64, u32)> {
    entries.iter().map(|e| (e.base, e.exponent)).collect()
}

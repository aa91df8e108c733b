// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for target validation.

use thiserror::Error;

/// Rejection of a proposed search target.
///
/// This is the only error the resolver can produce. Every other
/// operation is total over valid state: "nothing found" is `None` from
/// the search methods, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TargetError {
    /// The target's magnitude is below 2. Such targets (0, 1, -1) have
    /// no base of magnitude >= 2 and would make the power check loop
    /// forever if let through.
    #[error("invalid target {0}: magnitude must be at least 2")]
    InvalidTarget(i64),
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Brute-force search for the integer logarithm bases of a target.
//!
//! Given a target integer x with |x| >= 2, find every pair (b, k) with
//! `b^k == x`, |b| >= 2 and k >= 2, by trying candidate bases one at a
//! time. No real logarithms are computed: exact powers are detected by
//! repeated integer multiplication, so there are no floating-point
//! precision edge cases around perfect powers.
//!
//! # Architecture
//!
//! Two tiers:
//!
//! ## Tier 1: the power check (pure)
//!
//! [`power::exponent_of`] decides whether one base produces the target,
//! with early exit once the accumulated power reaches the target's
//! magnitude. This is the only numeric algorithm in the crate.
//!
//! ## Tier 2: the resolver (stateful)
//!
//! [`resolver::LogResolver`] owns the search session: the target, a
//! movable cursor over candidate bases, a direction flag, the entries
//! discovered so far, and hit/miss counters. It can try one candidate,
//! sweep to the next hit, or enumerate every hit within the sanity bound
//! of |x| / 2.
//!
//! The resolver is single-threaded by design. Concurrent searches over
//! different targets use independent instances; there is no shared state
//! between them.
//!
//! # Example
//!
//! ```
//! use intlog_search::LogResolver;
//!
//! let mut resolver = LogResolver::new(1_000_000)?;
//! let entries = resolver.find_all();
//!
//! assert_eq!(entries.len(), 3);
//! assert_eq!((entries[0].base, entries[0].exponent), (10, 6));
//! # Ok::<(), intlog_search::TargetError>(())
//! ```

pub mod power;
pub mod resolver;

// Re-export commonly used types
pub use resolver::{Direction, LogEntry, LogResolver, TargetError};

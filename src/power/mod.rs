// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact integer power check.
//!
//! Decides whether `base^k == x` for some integer k by repeated
//! multiplication with early exit. Comparisons are on magnitude so the
//! same loop covers negative bases and negative targets: for |base| >= 2
//! the accumulator's magnitude grows strictly on every step, which is
//! what guarantees termination.

/// Smallest magnitude a candidate base may have.
///
/// 0, 1 and -1 reproduce themselves (up to sign) under multiplication,
/// so the accumulator would never grow past them.
pub const MIN_BASE_MAGNITUDE: u64 = 2;

/// Smallest magnitude a search target may have.
///
/// Below this no base of magnitude >= 2 can reach the target.
pub const MIN_TARGET_MAGNITUDE: u64 = 2;

/// Find the exponent k >= 1 with `base^k == x`, if one exists.
///
/// Multiplies an accumulator (initialized to `base`) by `base` until its
/// magnitude reaches |x|; the exponent is the number of multiplications
/// plus one. Returns `None` for bases of magnitude < 2, on overflow
/// (the power then cannot equal any representable target), or when the
/// accumulator overshoots or lands on the wrong sign.
///
/// Note `exponent_of(x, x) == Some(1)`: the trivial self-power is the
/// caller's job to exclude, and [`crate::resolver::LogResolver`] never
/// tries a cursor of magnitude >= |x|.
///
/// # Example
///
/// ```
/// use intlog_search::power::exponent_of;
///
/// assert_eq!(exponent_of(2, 4), Some(2));
/// assert_eq!(exponent_of(3, 4), None);
/// assert_eq!(exponent_of(-2, -8), Some(3));
/// ```
pub fn exponent_of(base: i64, x: i64) -> Option<u32> {
    if base.unsigned_abs() < MIN_BASE_MAGNITUDE {
        return None;
    }

    let mut accumulator = base;
    let mut multiplications: u32 = 0;

    while accumulator.unsigned_abs() < x.unsigned_abs() {
        accumulator = accumulator.checked_mul(base)?;
        multiplications += 1;
    }

    if accumulator == x {
        Some(multiplications + 1)
    } else {
        None
    }
}

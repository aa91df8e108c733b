// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Descending-direction searches: negative bases, and negative targets
//! that only a downward sweep can resolve.

mod common;

use common::pairs;
use intlog_search::{Direction, LogResolver};

#[test]
fn test_descending_finds_negative_bases_of_a_positive_target() {
    let mut resolver = LogResolver::new(64).unwrap();
    resolver.flip_direction();

    // The cursor still starts at 2, so the sweep picks up 2^6 on its way down
    assert_eq!(
        pairs(&resolver.find_all()),
        vec![(2, 6), (-2, 6), (-8, 2)]
    );
}

#[test]
fn test_descending_counters() {
    let mut resolver = LogResolver::new(64).unwrap();
    resolver.flip_direction();
    resolver.find_all();

    // Candidates 2 down through -32, including the degenerate 1, 0, -1
    assert_eq!(resolver.success_count(), 3);
    assert_eq!(resolver.failure_count(), 32);
}

#[test]
fn test_negative_target_needs_a_descending_sweep() {
    let mut resolver = LogResolver::new(-8).unwrap();

    // Upward: no positive base has a negative power
    assert!(resolver.find_all().is_empty());

    resolver.flip_direction();
    assert_eq!(pairs(&resolver.find_all()), vec![(-2, 3)]);
}

#[test]
fn test_ascending_and_descending_are_symmetric_around_sixteen() {
    let mut resolver = LogResolver::new(16).unwrap();
    assert_eq!(pairs(&resolver.find_all()), vec![(2, 4), (4, 2)]);

    resolver.flip_direction();
    assert_eq!(
        pairs(&resolver.find_all()),
        vec![(2, 4), (-2, 4), (-4, 2)]
    );
}

#[test]
fn test_flip_twice_restores_ascending() {
    let mut resolver = LogResolver::new(16).unwrap();
    resolver.flip_direction();
    resolver.flip_direction();
    assert_eq!(resolver.direction(), Direction::Ascending);
    assert_eq!(pairs(&resolver.find_all()), vec![(2, 4), (4, 2)]);
}

#[test]
fn test_descending_terminates_on_targets_with_no_hits() {
    // Small magnitudes drive the cursor straight through 1, 0, -1;
    // the sweep must still stop at the mirrored bound
    for x in [2, 3, -2, -3, 17, -17] {
        let mut resolver = LogResolver::new(x).unwrap();
        resolver.flip_direction();
        assert!(resolver.find_all().is_empty(), "target {}", x);
    }
}

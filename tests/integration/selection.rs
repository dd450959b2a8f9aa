//! Combination selector behaviour through the public API.

use seqscan::selector::{
    best_of_three, best_of_two, best_triple, derive_pair_sums, pair_gap_valid, triple_gap_valid,
};

#[test]
fn test_pair_sums_then_search() {
    let sums = derive_pair_sums(&[1, 5, 3, 2, 6, 6, 10, 4, 7, 2, 1]);
    assert_eq!(sums, vec![6, 8, 5, 8, 12, 16, 14, 11, 9, 3]);
    assert_eq!(best_of_three(sums.len(), &sums), 35);
    assert_eq!(best_of_two(0, sums.len(), &sums), 27);
}

#[test]
fn test_triple_never_uses_adjacent_windows() {
    // The three largest sums sit side by side; the winner must spread out.
    let sums = [1, 50, 60, 50, 1, 1];
    let best = best_triple(sums.len(), &sums).unwrap();
    let idx = best.combination.indices();
    assert!(triple_gap_valid(idx[0], idx[1], idx[2]));
    assert_eq!(best.total, 50 + 50 + 1);
}

#[test]
fn test_gap_predicates() {
    assert!(pair_gap_valid(0, 2));
    assert!(!pair_gap_valid(0, 1));
    assert!(triple_gap_valid(1, 3, 5));
    assert!(!triple_gap_valid(1, 3, 4));
}

// Flags the fallback quirk: a lone pair-sum at the final index is never
// picked up by `best_of_two`, even though it is in range.
#[test]
fn test_best_of_two_ignores_final_single() {
    assert_eq!(best_of_two(0, 1, &[3]), 0);
    assert_eq!(best_of_two(0, 2, &[1, 9]), 1);
}

//! Gap predicates for pair-sum index selections.
//!
//! Pair-sum `i` covers original elements `i` and `i + 1`, so two chosen
//! indices must differ by more than 1 for their windows to be disjoint.

/// True iff `j - i > 1`.
pub fn pair_gap_valid(i: usize, j: usize) -> bool {
    j.checked_sub(i).is_some_and(|gap| gap > 1)
}

/// True iff both `j - i > 1` and `k - j > 1`.
pub fn triple_gap_valid(i: usize, j: usize, k: usize) -> bool {
    pair_gap_valid(i, j) && pair_gap_valid(j, k)
}

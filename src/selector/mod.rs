//! Combination selector: pair-sum derivation and non-adjacent selection.
//!
//! The input sequence is first folded into adjacent pair-sums; the search
//! then picks two or three of them whose underlying windows do not share
//! an original element.

pub mod gap;
pub mod search;

use tracing::debug;

pub use gap::{pair_gap_valid, triple_gap_valid};
pub use search::{best_of_three, best_of_two, best_pair, best_triple};

/// `result[i] = sequence[i] + sequence[i + 1]`.
///
/// Length is `max(sequence.len() - 1, 0)`. Sums wrap on overflow.
pub fn derive_pair_sums(sequence: &[i64]) -> Vec<i64> {
    sequence.windows(2).map(|w| w[0].wrapping_add(w[1])).collect()
}

/// Best total for up to three non-overlapping adjacent pairs.
///
/// Takes the larger of the triple search, the pair search (with its
/// single-value fallback) and the largest lone pair-sum; never below 0.
pub fn best_selection(sequence: &[i64]) -> i64 {
    let pair_sums = derive_pair_sums(sequence);
    let length = pair_sums.len();

    let three = best_of_three(length, &pair_sums);
    let two = best_of_two(0, length, &pair_sums);
    let one = pair_sums.iter().copied().max().unwrap_or(0);

    let best = three.max(two).max(one).max(0);
    debug!(length, three, two, one, best, "Selection computed");
    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Exhaustive search over pair-sum index combinations.
//!
//! Pairs are O(m²) and triples O(m³). There is no pruning; these searches
//! are meant for small inputs. Sums are not reduced; they wrap on
//! overflow, so totals are only meaningful when they fit in `i64`.

use itertools::Itertools;

use super::gap::{pair_gap_valid, triple_gap_valid};
use crate::types::{Candidate, IndexCombination};

// ---------------------------------------------------------------------------
// Candidate enumeration
// ---------------------------------------------------------------------------

fn valid_pairs(start: usize, length: usize) -> impl Iterator<Item = IndexCombination> {
    (start..length)
        .tuple_combinations()
        .filter(|&(i, j)| pair_gap_valid(i, j))
        .map(|(first, second)| IndexCombination::Pair { first, second })
}

fn valid_triples(length: usize) -> impl Iterator<Item = IndexCombination> {
    (0..length)
        .tuple_combinations()
        .filter(|&(i, j, k)| triple_gap_valid(i, j, k))
        .map(|(first, second, third)| IndexCombination::Triple {
            first,
            second,
            third,
        })
}

/// Highest total wins; on ties the earliest combination is kept.
fn best_of(
    combinations: impl Iterator<Item = IndexCombination>,
    pair_sums: &[i64],
) -> Option<Candidate> {
    combinations
        .map(|combination| Candidate {
            combination,
            total: combination.total(pair_sums),
        })
        .reduce(|best, c| if c.total > best.total { c } else { best })
}

// ---------------------------------------------------------------------------
// Pair / triple search
// ---------------------------------------------------------------------------

/// Best valid pair with `start <= i < j < length`.
///
/// `length` is clamped to `pair_sums.len()`.
pub fn best_pair(start: usize, length: usize, pair_sums: &[i64]) -> Option<Candidate> {
    let length = length.min(pair_sums.len());
    best_of(valid_pairs(start, length), pair_sums)
}

/// Best valid triple with `i < j < k < length`.
///
/// `length` is clamped to `pair_sums.len()`.
pub fn best_triple(length: usize, pair_sums: &[i64]) -> Option<Candidate> {
    let length = length.min(pair_sums.len());
    best_of(valid_triples(length), pair_sums)
}

/// Maximum over valid pairs, floored at 0, then widened by the best single
/// pair-sum in `start..length - 1`.
///
/// The single-value fallback runs whether or not a valid pair was found,
/// and it never looks at index `length - 1`. Both quirks are kept as-is.
pub fn best_of_two(start: usize, length: usize, pair_sums: &[i64]) -> i64 {
    let length = length.min(pair_sums.len());
    let mut result = best_pair(start, length, pair_sums)
        .map_or(0, |c| c.total)
        .max(0);

    if length > 0 {
        let single = pair_sums
            .get(start..length - 1)
            .and_then(|window| window.iter().copied().max());
        if let Some(single) = single {
            result = result.max(single);
        }
    }
    result
}

/// Maximum over valid triples, or 0 when none exists or all are negative.
pub fn best_of_three(length: usize, pair_sums: &[i64]) -> i64 {
    best_triple(length, pair_sums)
        .map_or(0, |c| c.total)
        .max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

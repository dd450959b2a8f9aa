//! Sequence analysis — runs the profit scanner and the combination
//! selector over one sequence and gathers the results into a report.

use tracing::{debug, info};

use crate::scanner;
use crate::selector;
use crate::types::{AnalysisReport, PriceSequence};

/// Run both components over `sequence`.
///
/// Pure apart from logging; the report owns copies of everything it shows.
pub fn analyze(name: &str, sequence: &PriceSequence) -> AnalysisReport {
    let prices = sequence.as_slice();

    // Profit scan
    let transactions: Vec<_> = scanner::transactions(prices).collect();
    for tx in &transactions {
        debug!(
            sample = name,
            buy_index = tx.buy_index,
            sell_index = tx.sell_index,
            gain = tx.gain(),
            "Transaction"
        );
    }
    let max_profit = scanner::total_profit(&transactions);

    // Combination search
    let pair_sums = selector::derive_pair_sums(prices);
    let length = pair_sums.len();
    let best_pair = selector::best_pair(0, length, &pair_sums);
    let best_triple = selector::best_triple(length, &pair_sums);
    let best_of_two = selector::best_of_two(0, length, &pair_sums);
    let best_of_three = selector::best_of_three(length, &pair_sums);
    let best_selection = selector::best_selection(prices);

    info!(
        sample = name,
        len = prices.len(),
        transactions = transactions.len(),
        max_profit,
        best_of_two,
        best_of_three,
        best_selection,
        "Sequence analysed"
    );

    AnalysisReport {
        name: name.to_string(),
        sequence: sequence.clone(),
        transactions,
        max_profit,
        pair_sums,
        best_of_two,
        best_pair,
        best_of_three,
        best_triple,
        best_selection,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

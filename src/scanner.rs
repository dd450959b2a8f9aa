//! Profit scanner.
//!
//! Single left-to-right greedy pass over a price sequence: find a valley,
//! ride the following non-decreasing run to its peak, bank the difference,
//! repeat. Totals are kept modulo `PROFIT_MODULUS`.

use tracing::trace;

use crate::types::Transaction;

/// Every accumulation step is reduced modulo this value.
pub const PROFIT_MODULUS: u64 = 1_000_000_000;

// ---------------------------------------------------------------------------
// Transaction iterator
// ---------------------------------------------------------------------------

/// Lazy valley/peak scan over a borrowed price slice.
///
/// Yields transactions in order; at most one position is held at a time,
/// and each transaction starts strictly after the previous one's peak.
#[derive(Debug, Clone)]
pub struct Transactions<'a> {
    prices: &'a [i64],
    cursor: usize,
}

impl<'a> Transactions<'a> {
    pub fn new(prices: &'a [i64]) -> Self {
        Self { prices, cursor: 0 }
    }
}

impl Iterator for Transactions<'_> {
    type Item = Transaction;

    fn next(&mut self) -> Option<Transaction> {
        let prices = self.prices;
        let n = prices.len();
        let mut i = self.cursor;

        // Valley: skip descending and flat stretches.
        while i + 1 < n && prices[i] >= prices[i + 1] {
            i += 1;
        }
        if i + 1 >= n {
            self.cursor = n;
            return None;
        }
        let buy_index = i;

        // Peak: last index of the non-decreasing run after the valley.
        i += 1;
        while i + 1 < n && prices[i + 1] >= prices[i] {
            i += 1;
        }
        let sell_index = i;
        self.cursor = sell_index + 1;

        let tx = Transaction {
            buy_index,
            buy: prices[buy_index],
            sell_index,
            sell: prices[sell_index],
        };
        trace!(buy_index, sell_index, gain = tx.gain(), "Transaction found");
        Some(tx)
    }
}

impl std::iter::FusedIterator for Transactions<'_> {}

/// Scan `prices` for valley-to-peak transactions.
pub fn transactions(prices: &[i64]) -> Transactions<'_> {
    Transactions::new(prices)
}

// ---------------------------------------------------------------------------
// Maximum profit
// ---------------------------------------------------------------------------

/// Total profit of all scanned transactions, modulo `PROFIT_MODULUS`.
///
/// Empty and single-element inputs yield 0, as does any sequence with no
/// rise anywhere.
pub fn max_profit(prices: &[i64]) -> u64 {
    total_profit(transactions(prices))
}

/// Sum of transaction gains, reduced modulo `PROFIT_MODULUS` after each step.
pub fn total_profit<I>(transactions: I) -> u64
where
    I: IntoIterator,
    I::Item: std::borrow::Borrow<Transaction>,
{
    use std::borrow::Borrow;

    transactions.into_iter().fold(0, |total, tx| {
        (total + tx.borrow().gain() % PROFIT_MODULUS) % PROFIT_MODULUS
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

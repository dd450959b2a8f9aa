//! Shared types for seqscan.
//!
//! The scanner and the selector never depend on each other; both only
//! depend on the data model defined here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Price sequence
// ---------------------------------------------------------------------------

/// An ordered sequence of integer observations, indexed `0..n`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSequence(Vec<i64>);

impl PriceSequence {
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }
}

impl Deref for PriceSequence {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.0
    }
}

impl From<Vec<i64>> for PriceSequence {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}

impl From<&[i64]> for PriceSequence {
    fn from(values: &[i64]) -> Self {
        Self(values.to_vec())
    }
}

impl fmt::Display for PriceSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

/// Parses comma and/or whitespace separated integers.
/// Surrounding brackets are accepted so `Display` output parses back.
impl FromStr for PriceSequence {
    type Err = SeqscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim().trim_start_matches('[').trim_end_matches(']');
        body.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(position, token)| {
                token.parse::<i64>().map_err(|_| SeqscanError::InvalidPrice {
                    token: token.to_string(),
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

/// One valley-to-peak trade found by the profit scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub buy_index: usize,
    pub buy: i64,
    pub sell_index: usize,
    pub sell: i64,
}

impl Transaction {
    /// Peak minus valley. Scanner output always has `sell > buy`.
    pub fn gain(&self) -> u64 {
        debug_assert!(self.sell >= self.buy, "sell below buy: {self:?}");
        self.sell.abs_diff(self.buy)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "buy {}@{} -> sell {}@{} (+{})",
            self.buy,
            self.buy_index,
            self.sell,
            self.sell_index,
            self.gain(),
        )
    }
}

// ---------------------------------------------------------------------------
// Index combinations
// ---------------------------------------------------------------------------

/// A selection of pair-sum indices, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IndexCombination {
    Pair { first: usize, second: usize },
    Triple { first: usize, second: usize, third: usize },
}

impl IndexCombination {
    /// True when no two chosen pair-sums touch the same original element.
    pub fn is_valid(&self) -> bool {
        match *self {
            Self::Pair { first, second } => crate::selector::pair_gap_valid(first, second),
            Self::Triple {
                first,
                second,
                third,
            } => crate::selector::triple_gap_valid(first, second, third),
        }
    }

    pub fn indices(&self) -> Vec<usize> {
        match *self {
            Self::Pair { first, second } => vec![first, second],
            Self::Triple {
                first,
                second,
                third,
            } => vec![first, second, third],
        }
    }

    /// Sum of the selected pair-sums, wrapping on overflow.
    /// Caller guarantees indices are in range.
    pub fn total(&self, pair_sums: &[i64]) -> i64 {
        self.indices()
            .into_iter()
            .fold(0i64, |acc, i| acc.wrapping_add(pair_sums[i]))
    }
}

impl fmt::Display for IndexCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pair { first, second } => write!(f, "({first}, {second})"),
            Self::Triple {
                first,
                second,
                third,
            } => write!(f, "({first}, {second}, {third})"),
        }
    }
}

/// A valid combination together with the total it achieves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub combination: IndexCombination,
    pub total: i64,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.combination, self.total)
    }
}

// ---------------------------------------------------------------------------
// Analysis report
// ---------------------------------------------------------------------------

/// Everything both components computed for one sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub name: String,
    pub sequence: PriceSequence,
    pub transactions: Vec<Transaction>,
    pub max_profit: u64,
    pub pair_sums: Vec<i64>,
    pub best_of_two: i64,
    pub best_pair: Option<Candidate>,
    pub best_of_three: i64,
    pub best_triple: Option<Candidate>,
    pub best_selection: i64,
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.name, self.sequence)?;
        writeln!(
            f,
            "  max profit: {} ({} transaction(s))",
            self.max_profit,
            self.transactions.len()
        )?;
        for tx in &self.transactions {
            writeln!(f, "    {tx}")?;
        }
        writeln!(f, "  pair sums: {}", PriceSequence::from(self.pair_sums.as_slice()))?;
        match &self.best_pair {
            Some(c) => writeln!(f, "  best of two: {} via {c}", self.best_of_two)?,
            None => writeln!(f, "  best of two: {}", self.best_of_two)?,
        }
        match &self.best_triple {
            Some(c) => writeln!(f, "  best of three: {} via {c}", self.best_of_three)?,
            None => writeln!(f, "  best of three: {}", self.best_of_three)?,
        }
        write!(f, "  best selection: {}", self.best_selection)
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for seqscan.
#[derive(Debug, thiserror::Error)]
pub enum SeqscanError {
    #[error("Invalid price {token:?} at position {position}")]
    InvalidPrice { token: String, position: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- PriceSequence tests --

    #[test]
    fn test_parse_comma_separated() {
        let seq: PriceSequence = "2,3,5,2".parse().unwrap();
        assert_eq!(seq.as_slice(), &[2, 3, 5, 2]);
    }

    #[test]
    fn test_parse_whitespace_and_brackets() {
        let seq: PriceSequence = " [1, -2  3]\n".parse().unwrap();
        assert_eq!(seq.as_slice(), &[1, -2, 3]);
    }

    #[test]
    fn test_parse_empty_is_empty_sequence() {
        let seq: PriceSequence = "".parse().unwrap();
        assert!(seq.is_empty());
        let seq: PriceSequence = "[]".parse().unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_parse_invalid_token_reports_position() {
        let err = "1,2,x,4".parse::<PriceSequence>().unwrap_err();
        match err {
            SeqscanError::InvalidPrice { token, position } => {
                assert_eq!(token, "x");
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_display_parses_back() {
        let seq = PriceSequence::new(vec![5, 10, -3]);
        let text = seq.to_string();
        assert_eq!(text, "[5, 10, -3]");
        assert_eq!(text.parse::<PriceSequence>().unwrap(), seq);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let seq = PriceSequence::new(vec![1, 2]);
        assert_eq!(serde_json::to_string(&seq).unwrap(), "[1,2]");
        let back: PriceSequence = serde_json::from_str("[1,2]").unwrap();
        assert_eq!(back, seq);
    }

    // -- Transaction tests --

    #[test]
    fn test_transaction_gain() {
        let tx = Transaction { buy_index: 0, buy: 2, sell_index: 2, sell: 5 };
        assert_eq!(tx.gain(), 3);
        assert_eq!(tx.to_string(), "buy 2@0 -> sell 5@2 (+3)");
    }

    #[test]
    fn test_transaction_gain_extreme_values() {
        let tx = Transaction { buy_index: 0, buy: i64::MIN, sell_index: 1, sell: i64::MAX };
        assert_eq!(tx.gain(), u64::MAX);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "sell below buy")]
    fn test_transaction_gain_rejects_loss() {
        let tx = Transaction { buy_index: 0, buy: 5, sell_index: 1, sell: 3 };
        let _ = tx.gain();
    }

    // -- IndexCombination tests --

    #[test]
    fn test_combination_validity() {
        assert!(IndexCombination::Pair { first: 0, second: 2 }.is_valid());
        assert!(!IndexCombination::Pair { first: 0, second: 1 }.is_valid());
        assert!(IndexCombination::Triple { first: 0, second: 2, third: 4 }.is_valid());
        assert!(!IndexCombination::Triple { first: 0, second: 2, third: 3 }.is_valid());
    }

    #[test]
    fn test_combination_total() {
        let sums = [5, 8, 7, 5, 7];
        let combo = IndexCombination::Triple { first: 0, second: 2, third: 4 };
        assert_eq!(combo.total(&sums), 19);
        assert_eq!(combo.to_string(), "(0, 2, 4)");
    }

    #[test]
    fn test_combination_total_wraps() {
        let sums = [i64::MAX, 0, 1];
        let combo = IndexCombination::Pair { first: 0, second: 2 };
        assert_eq!(combo.total(&sums), i64::MIN);
    }

    #[test]
    fn test_combination_serialization_tagged() {
        let combo = IndexCombination::Pair { first: 1, second: 3 };
        let json = serde_json::to_string(&combo).unwrap();
        assert_eq!(json, r#"{"kind":"pair","first":1,"second":3}"#);
    }

    // -- Error tests --

    #[test]
    fn test_error_display() {
        let err = SeqscanError::Config("sample name is empty".into());
        assert_eq!(err.to_string(), "Configuration error: sample name is empty");
    }
}

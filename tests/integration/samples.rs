//! Demo driver samples, pinned as table-driven cases.
//!
//! Each row: sequence, expected pair-sum selection, expected scanner profit.

use seqscan::analysis::analyze;
use seqscan::config::SampleSet;
use seqscan::scanner::max_profit;
use seqscan::selector::best_selection;
use seqscan::types::PriceSequence;

const CASES: &[(&str, &[i64], i64, u64)] = &[
    ("A1", &[2, 3, 5, 2, 3, 4, 6, 4, 1], 25, 7),
    ("A2", &[1, 5, 3, 2, 6, 6, 10, 4, 7, 2, 1], 35, 15),
    ("A3", &[1, 2, 3, 3, 2], 10, 2),
    ("A4", &[5, 10, 3], 15, 5),
    ("A5", &[1, 2], 3, 1),
    ("A6", &[1], 0, 0),
    ("A7", &[], 0, 0),
];

#[test]
fn test_sample_selection_totals() {
    for (name, seq, expected, _) in CASES {
        assert_eq!(best_selection(seq), *expected, "selection for {name}");
    }
}

#[test]
fn test_sample_profits() {
    for (name, seq, _, expected) in CASES {
        assert_eq!(max_profit(seq), *expected, "profit for {name}");
    }
}

#[test]
fn test_builtin_samples_match_table() {
    let builtin = SampleSet::default();
    assert_eq!(builtin.0.len(), CASES.len());
    for (sample, (name, seq, _, _)) in builtin.0.iter().zip(CASES) {
        assert_eq!(sample.name, *name);
        assert_eq!(sample.values.as_slice(), *seq);
    }
}

#[test]
fn test_reports_agree_with_direct_calls() {
    for (name, seq, selection, profit) in CASES {
        let report = analyze(name, &PriceSequence::from(*seq));
        assert_eq!(report.best_selection, *selection, "{name}");
        assert_eq!(report.max_profit, *profit, "{name}");
    }
}

#[test]
fn test_repeated_calls_identical() {
    for (_, seq, _, _) in CASES {
        assert_eq!(max_profit(seq), max_profit(seq));
        assert_eq!(best_selection(seq), best_selection(seq));
    }
}

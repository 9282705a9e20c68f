//! Property-based tests for the statistics engine.
//!
//! Rows are generated with a small key alphabet so that grouping produces
//! several multi-row partitions, and with blank cells mixed into both the
//! numeric and the categorical column. The numeric column occasionally holds
//! `inf`, which a declared numeric column must reject.

use std::collections::BTreeSet;

use proptest::prelude::*;
use tabstat_core::{
    EngineError, SummaryOptions, analyze, partition, summarize_categorical, value_frequencies,
};
use tabstat_model::{ColumnSummary, Dataset, GroupSpec, Metadata, MissingPolicy};

fn key_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "", "B"]).prop_map(str::to_string)
}

fn number_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => (-1.0e6f64..1.0e6).prop_map(|v| v.to_string()),
        1 => Just(String::new()),
        1 => Just("  ".to_string()),
        1 => Just("inf".to_string()),
    ]
}

fn label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(vec!["x", "y", "z", "x y"]).prop_map(str::to_string),
        1 => Just(String::new()),
    ]
}

fn rows_strategy() -> impl Strategy<Value = Vec<(String, String, String, String)>> {
    prop::collection::vec(
        (key_strategy(), key_strategy(), number_strategy(), label_strategy()),
        0..60,
    )
}

fn build(rows: &[(String, String, String, String)]) -> Dataset {
    Dataset::from_strings(
        ["k1", "k2", "value", "label"],
        rows.iter()
            .map(|(k1, k2, v, l)| vec![k1.clone(), k2.clone(), v.clone(), l.clone()]),
    )
    .expect("dataset")
}

fn metadata() -> Metadata {
    Metadata::new()
        .with_numeric(["value"])
        .with_categorical(["label"])
        .with_group_by(GroupSpec::new(["k1"]))
        .with_group_by(GroupSpec::new(["k1", "k2"]))
}

fn check_summary(summary: &ColumnSummary, rows: usize) -> Result<(), TestCaseError> {
    prop_assert_eq!(summary.count() + summary.missing(), rows);
    match summary {
        ColumnSummary::Numeric(numeric) => {
            prop_assert!(numeric.std >= 0.0);
            if numeric.count > 0 {
                let min = numeric.min.expect("min");
                let max = numeric.max.expect("max");
                prop_assert!(min <= numeric.mean && numeric.mean <= max);
            } else {
                prop_assert!(numeric.min.is_none() && numeric.max.is_none());
            }
        }
        ColumnSummary::Categorical(categorical) => {
            prop_assert!(categorical.unique <= categorical.count);
            prop_assert!(categorical.value_counts.len() <= 5);
            if categorical.unique <= 5 {
                let total: usize = categorical.value_counts.iter().map(|v| v.count).sum();
                prop_assert_eq!(total, categorical.count);
            }
            if let Some(first) = categorical.value_counts.first() {
                prop_assert_eq!(Some(&first.value), categorical.top.as_ref());
                prop_assert_eq!(first.count, categorical.freq);
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn summaries_hold_invariants(rows in rows_strategy()) {
        let dataset = build(&rows);
        let result = analyze("prop", &dataset, &metadata(), &SummaryOptions::default());
        if rows.iter().any(|row| row.2 == "inf") {
            prop_assert!(
                matches!(result, Err(EngineError::TypeCoercion { ref value, .. }) if value == "inf"),
                "inf accepted: {:?}",
                result
            );
            return Ok(());
        }
        let report = result.expect("analyze");

        for entry in report.overall().expect("overall") {
            check_summary(&entry.summary, dataset.row_count())?;
        }
        for (_, groups) in report.grouped() {
            for group in groups {
                for entry in &group.columns {
                    check_summary(&entry.summary, group.row_count)?;
                }
            }
        }
    }

    #[test]
    fn partitions_cover_rows_exactly_once(rows in rows_strategy()) {
        let dataset = build(&rows);
        let partitions = partition(&dataset, &[0, 1], &MissingPolicy::default());

        let mut keys = BTreeSet::new();
        let mut seen = vec![0usize; dataset.row_count()];
        for part in &partitions {
            prop_assert_eq!(part.key.len(), 2);
            prop_assert!(keys.insert(part.key.clone()), "duplicate key {:?}", part.key);
            for &row in &part.rows {
                seen[row] += 1;
            }
        }
        prop_assert!(seen.iter().all(|&hits| hits == 1));

        // First-occurrence order: each partition starts after the previous one did.
        let starts: Vec<usize> = partitions.iter().map(|part| part.rows[0]).collect();
        prop_assert!(starts.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn analysis_is_deterministic(rows in rows_strategy()) {
        let dataset = build(&rows);
        let options = SummaryOptions::default().with_quartiles(true);
        let first = analyze("prop", &dataset, &metadata(), &options);
        let second = analyze("prop", &dataset, &metadata(), &options);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn frequencies_account_for_every_value(
        values in prop::collection::vec("[a-j]{1,2}", 0..300),
    ) {
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let frequencies = value_frequencies(&refs);

        let total: usize = frequencies.iter().map(|(_, count)| count).sum();
        prop_assert_eq!(total, refs.len());

        let distinct: BTreeSet<&str> = refs.iter().copied().collect();
        prop_assert_eq!(frequencies.len(), distinct.len());

        let mut first_seen = Vec::new();
        for value in &refs {
            if !first_seen.contains(value) {
                first_seen.push(*value);
            }
        }
        let order: Vec<&str> = frequencies.iter().map(|(value, _)| *value).collect();
        prop_assert_eq!(order, first_seen);

        let summary = summarize_categorical(&refs, 0, 5);
        prop_assert_eq!(summary.unique, distinct.len());
        prop_assert_eq!(summary.count, refs.len());
        prop_assert!(summary.value_counts.len() <= 5);
        if let Some(first) = summary.value_counts.first() {
            let highest = frequencies.iter().map(|(_, count)| *count).max();
            prop_assert_eq!(Some(first.count), highest);
        }
    }
}

//! End-to-end tests for the analysis pass.

use tabstat_core::{Declaration, EngineError, SummaryOptions, analyze};
use tabstat_model::{ColumnRole, ColumnSummary, Dataset, GroupSpec, Metadata, Section};

fn sample() -> Dataset {
    Dataset::from_strings(["team", "score"], [["A", "10"], ["A", "20"], ["B", ""]])
        .expect("dataset")
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn grouped_numeric_summary_matches_hand_computation() {
    let metadata = Metadata::new()
        .with_numeric(["score"])
        .with_group_by(GroupSpec::new(["team"]));
    let report = analyze("scores", &sample(), &metadata, &SummaryOptions::default())
        .expect("analyze");

    let (keys, groups) = report.grouped().next().expect("grouped section");
    assert_eq!(keys, ["team".to_string()]);
    assert_eq!(groups.len(), 2);

    assert_eq!(groups[0].key, vec![Some("A".to_string())]);
    let a = groups[0]
        .column("score")
        .and_then(ColumnSummary::as_numeric)
        .expect("numeric summary for A");
    assert_eq!(a.count, 2);
    assert!(close(a.mean, 15.0));
    assert_eq!(a.min, Some(10.0));
    assert_eq!(a.max, Some(20.0));
    assert!(close(a.std, 5.0));

    assert_eq!(groups[1].key, vec![Some("B".to_string())]);
    let b = groups[1]
        .column("score")
        .and_then(ColumnSummary::as_numeric)
        .expect("numeric summary for B");
    assert_eq!(b.count, 0);
    assert_eq!(b.missing, 1);
    assert_eq!(b.mean, 0.0);
    assert!(b.min.is_none());
    assert!(b.max.is_none());
    assert_eq!(b.std, 0.0);
}

#[test]
fn categorical_overall_summary() {
    let dataset =
        Dataset::from_strings(["c"], [["x"], ["y"], ["x"], ["x"]]).expect("dataset");
    let metadata = Metadata::new().with_categorical(["c"]);
    let report = analyze("cats", &dataset, &metadata, &SummaryOptions::default())
        .expect("analyze");
    let summary = report
        .overall_column("c")
        .and_then(ColumnSummary::as_categorical)
        .expect("categorical summary");
    assert_eq!(summary.count, 4);
    assert_eq!(summary.unique, 2);
    assert_eq!(summary.top.as_deref(), Some("x"));
    assert_eq!(summary.freq, 3);
}

#[test]
fn declared_numeric_with_text_fails_without_report() {
    let dataset = Dataset::from_strings(["v"], [["1"], ["abc"]]).expect("dataset");
    let metadata = Metadata::new().with_numeric(["v"]);
    let result = analyze("bad", &dataset, &metadata, &SummaryOptions::default());
    assert_eq!(
        result.unwrap_err(),
        EngineError::TypeCoercion {
            column: "v".to_string(),
            row: 2,
            value: "abc".to_string(),
        }
    );
}

#[test]
fn missing_declared_column_is_schema_mismatch() {
    let metadata = Metadata::new().with_categorical(["region"]);
    let err = analyze("x", &sample(), &metadata, &SummaryOptions::default()).unwrap_err();
    assert_eq!(
        err,
        EngineError::SchemaMismatch {
            column: "region".to_string(),
            declared_as: Declaration::Categorical,
        }
    );

    let metadata = Metadata::new().with_group_by(GroupSpec::new(["team", "region"]));
    let err = analyze("x", &sample(), &metadata, &SummaryOptions::default()).unwrap_err();
    assert_eq!(
        err,
        EngineError::SchemaMismatch {
            column: "region".to_string(),
            declared_as: Declaration::GroupKey,
        }
    );
}

#[test]
fn conflicting_roles_and_empty_group_specs_are_rejected() {
    let metadata = Metadata::new()
        .with_numeric(["score"])
        .with_categorical(["score"]);
    let err = analyze("x", &sample(), &metadata, &SummaryOptions::default()).unwrap_err();
    assert!(matches!(err, EngineError::RoleConflict { .. }));

    let metadata = Metadata::new().with_group_by(GroupSpec::new(Vec::<String>::new()));
    let err = analyze("x", &sample(), &metadata, &SummaryOptions::default()).unwrap_err();
    assert_eq!(err, EngineError::EmptyGroupSpec { index: 1 });
}

#[test]
fn empty_dataset_produces_zero_counts() {
    let dataset =
        Dataset::from_strings(["team", "score"], Vec::<Vec<&str>>::new()).expect("dataset");
    let metadata = Metadata::new()
        .with_numeric(["score"])
        .with_categorical(["team"])
        .with_group_by(GroupSpec::new(["team"]));
    let report = analyze("empty", &dataset, &metadata, &SummaryOptions::default())
        .expect("analyze");
    assert_eq!(report.row_count, 0);
    assert_eq!(report.overall_column("score").map(ColumnSummary::count), Some(0));
    let team = report
        .overall_column("team")
        .and_then(ColumnSummary::as_categorical)
        .expect("team summary");
    assert!(team.top.is_none());
    assert_eq!(report.group_count(), 0);
}

#[test]
fn declared_role_beats_data() {
    let dataset = Dataset::from_strings(["zip"], [["02139"], ["10001"]]).expect("dataset");
    let metadata = Metadata::new().with_categorical(["zip"]);
    let report =
        analyze("zips", &dataset, &metadata, &SummaryOptions::default()).expect("analyze");
    let summary = report.overall_column("zip").expect("zip");
    assert_eq!(summary.role(), ColumnRole::Categorical);
    assert_eq!(
        summary.as_categorical().and_then(|s| s.top.as_deref()),
        Some("02139")
    );
}

#[test]
fn undeclared_columns_are_ignored_unless_inferred() {
    let dataset = Dataset::from_strings(
        ["id", "team", "score"],
        [["1", "A", "3"], ["2", "B", "4"]],
    )
    .expect("dataset");
    let metadata = Metadata::new().with_categorical(["team"]);
    let report = analyze("d", &dataset, &metadata, &SummaryOptions::default()).expect("analyze");
    assert!(report.overall_column("id").is_none());
    assert!(report.overall_column("score").is_none());

    let metadata = metadata.with_infer_undeclared(true);
    let report = analyze("d", &dataset, &metadata, &SummaryOptions::default()).expect("analyze");
    let columns: Vec<&str> = report
        .overall()
        .expect("overall")
        .iter()
        .map(|entry| entry.column.as_str())
        .collect();
    assert_eq!(columns, vec!["id", "team", "score"]);
    assert_eq!(
        report.overall_column("score").map(ColumnSummary::role),
        Some(ColumnRole::Numeric)
    );
}

#[test]
fn inferred_role_is_fixed_across_partitions() {
    // Group "B" alone would look numeric; the column is categorical overall.
    let dataset = Dataset::from_strings(
        ["team", "size"],
        [["A", "Varies"], ["B", "12"], ["A", "3"]],
    )
    .expect("dataset");
    let metadata = Metadata::new()
        .with_infer_undeclared(true)
        .with_group_by(GroupSpec::new(["team"]));
    let report = analyze("d", &dataset, &metadata, &SummaryOptions::default()).expect("analyze");
    for (_, groups) in report.grouped() {
        for group in groups {
            assert_eq!(
                group.column("size").map(ColumnSummary::role),
                Some(ColumnRole::Categorical)
            );
        }
    }
}

#[test]
fn na_tokens_apply_to_values_and_keys() {
    let dataset = Dataset::from_strings(
        ["team", "score"],
        [["NA", "1"], ["A", "NA"], ["", "3"]],
    )
    .expect("dataset");
    let metadata = Metadata::new()
        .with_numeric(["score"])
        .with_na_values(["NA"])
        .with_group_by(GroupSpec::new(["team"]));
    let report = analyze("d", &dataset, &metadata, &SummaryOptions::default()).expect("analyze");
    let score = report
        .overall_column("score")
        .and_then(ColumnSummary::as_numeric)
        .expect("score");
    assert_eq!(score.count, 2);
    assert_eq!(score.missing, 1);

    let (_, groups) = report.grouped().next().expect("grouped");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key, vec![None]);
    assert_eq!(groups[0].row_count, 2);
    assert_eq!(groups[1].key, vec![Some("A".to_string())]);
}

#[test]
fn sections_follow_group_by_declaration_order() {
    let dataset = Dataset::from_strings(
        ["a", "b", "v"],
        [["x", "1", "5"], ["y", "2", "6"]],
    )
    .expect("dataset");
    let metadata = Metadata::new()
        .with_numeric(["v"])
        .with_group_by(GroupSpec::new(["b"]))
        .with_group_by(GroupSpec::new(["a", "b"]));
    let report = analyze("d", &dataset, &metadata, &SummaryOptions::default()).expect("analyze");
    assert!(matches!(report.sections[0], Section::Overall { row_count: 2, .. }));
    let dims: Vec<Vec<String>> = report.grouped().map(|(keys, _)| keys.to_vec()).collect();
    assert_eq!(
        dims,
        vec![
            vec!["b".to_string()],
            vec!["a".to_string(), "b".to_string()],
        ]
    );
}

#[test]
fn repeated_runs_are_identical() {
    let dataset = Dataset::from_strings(
        ["k", "c", "v"],
        [["1", "p", "0.5"], ["2", "q", "1.5"], ["1", "q", "2.5"], ["2", "p", ""]],
    )
    .expect("dataset");
    let metadata = Metadata::new()
        .with_numeric(["v"])
        .with_categorical(["c"])
        .with_group_by(GroupSpec::new(["k"]));
    let options = SummaryOptions::default().with_quartiles(true);
    let first = analyze("d", &dataset, &metadata, &options).expect("first");
    let second = analyze("d", &dataset, &metadata, &options).expect("second");
    assert_eq!(first, second);
}

#[test]
fn infinite_values_are_not_numbers() {
    let dataset = Dataset::from_strings(["v"], [["inf"], ["1"]]).expect("dataset");
    let metadata = Metadata::new().with_numeric(["v"]);
    let err = analyze("inf", &dataset, &metadata, &SummaryOptions::default()).unwrap_err();
    assert_eq!(
        err,
        EngineError::TypeCoercion {
            column: "v".to_string(),
            row: 1,
            value: "inf".to_string(),
        }
    );

    let metadata = Metadata::new().with_infer_undeclared(true);
    let report =
        analyze("inf", &dataset, &metadata, &SummaryOptions::default()).expect("analyze");
    assert_eq!(
        report.overall_column("v").map(ColumnSummary::role),
        Some(ColumnRole::Categorical)
    );
}

#[test]
fn extreme_magnitudes_keep_finite_statistics() {
    let dataset =
        Dataset::from_strings(["v"], [["1e308"], ["1e308"], ["-1e308"]]).expect("dataset");
    let metadata = Metadata::new().with_numeric(["v"]);
    let report = analyze("big", &dataset, &metadata, &SummaryOptions::default()).expect("analyze");
    let summary = report
        .overall_column("v")
        .and_then(ColumnSummary::as_numeric)
        .expect("numeric summary");
    assert!((summary.mean - 1e308 / 3.0).abs() < 1e294);
    assert!(summary.std.is_finite() && summary.std >= 0.0);
}

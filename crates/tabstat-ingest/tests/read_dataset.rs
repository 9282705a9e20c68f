use std::fs;

use tabstat_ingest::{
    CleanPipeline, CleanRule, IngestError, NoopCleaner, clean_dataset, read_dataset,
};

#[test]
fn reads_file_and_applies_configured_rules() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("apps.csv");
    fs::write(
        &path,
        "App,Installs,Price,Type\n\
         Maps,\"1,000,000+\",$0,Free \n\
         Paint,500+,$2.99, Paid\n\
         ,,,\n\
         Broken,Free,Everyone,\n",
    )
    .expect("write csv");

    let dataset = read_dataset(&path).expect("read csv");
    assert_eq!(dataset.header(), ["App", "Installs", "Price", "Type"]);
    assert_eq!(dataset.row_count(), 3);

    #[derive(serde::Deserialize)]
    struct Rules {
        clean: Vec<CleanRule>,
    }
    let rules: Rules = toml::from_str(
        r#"
[[clean]]
op = "trim"

[[clean]]
op = "remove_chars"
column = "Installs"
chars = ",+"

[[clean]]
op = "remove_chars"
column = "Price"
chars = "$"

[[clean]]
op = "coerce_numeric"
column = "Installs"

[[clean]]
op = "null_if"
values = [""]
"#,
    )
    .expect("parse rules");

    let pipeline = CleanPipeline::compile(&rules.clean, dataset.header()).expect("compile");
    let cleaned = clean_dataset(dataset, &pipeline).expect("clean");
    assert_eq!(cleaned.cell(0, 1), Some("1000000"));
    assert_eq!(cleaned.cell(0, 2), Some("0"));
    assert_eq!(cleaned.cell(0, 3), Some("Free"));
    assert_eq!(cleaned.cell(1, 3), Some("Paid"));
    assert_eq!(cleaned.cell(2, 1), None);
    assert_eq!(cleaned.cell(2, 3), None);
}

#[test]
fn noop_cleaner_keeps_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("plain.csv");
    fs::write(&path, "a,b\n 1 ,x\n").expect("write csv");
    let dataset = read_dataset(&path).expect("read csv");
    let cleaned = clean_dataset(dataset.clone(), &NoopCleaner).expect("clean");
    assert_eq!(cleaned, dataset);
}

#[test]
fn missing_file_is_reported_with_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.csv");
    let err = read_dataset(&path).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { path: ref p } if *p == path));
}

#[test]
fn null_if_rule_takes_a_column_list() {
    #[derive(serde::Deserialize)]
    struct Rules {
        clean: Vec<CleanRule>,
    }
    let rules: Rules = toml::from_str(
        r#"
[[clean]]
op = "null_if"
columns = ["score", "team"]
values = ["tbd"]
"#,
    )
    .expect("parse rules");
    assert_eq!(
        rules.clean,
        vec![CleanRule::NullIf {
            columns: Some(vec!["score".to_string(), "team".to_string()]),
            values: vec!["tbd".to_string()],
        }]
    );
}

//! Batch configuration file.
//!
//! ```toml
//! output_dir = "reports"
//! top_k = 5
//! quartiles = false
//!
//! [[datasets]]
//! name = "Telco Customer Churn"
//! path = "data/telco.csv"
//! [datasets.metadata]
//! numeric = ["tenure"]
//! categorical = ["Contract"]
//! group_by = [["Contract"], ["Contract", "gender"]]
//! [[datasets.clean]]
//! op = "trim"
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tabstat_core::{DEFAULT_TOP_K, SummaryOptions};
use tabstat_ingest::CleanRule;
use tabstat_model::Metadata;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Datasets to analyze and the options shared by all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub output_dir: PathBuf,
    pub top_k: usize,
    pub quartiles: bool,
    pub datasets: Vec<DatasetConfig>,
}

impl AnalysisConfig {
    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions::default()
            .with_top_k(self.top_k)
            .with_quartiles(self.quartiles)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    pub name: String,
    pub path: PathBuf,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub clean: Vec<CleanRule>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    output_dir: Option<PathBuf>,
    #[serde(default = "default_top_k")]
    top_k: usize,
    #[serde(default)]
    quartiles: bool,
    #[serde(default)]
    datasets: Vec<DatasetConfig>,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> Result<AnalysisConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    parse_config(&contents, base_dir).map_err(|err| match err {
        ParseError::Toml(source) => ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        },
        ParseError::Invalid(reason) => ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        },
    })
}

enum ParseError {
    Toml(toml::de::Error),
    Invalid(String),
}

fn parse_config(contents: &str, base_dir: &Path) -> Result<AnalysisConfig, ParseError> {
    let file: ConfigFile = toml::from_str(contents).map_err(ParseError::Toml)?;
    validate(&file).map_err(ParseError::Invalid)?;

    let output_dir = base_dir.join(file.output_dir.unwrap_or_else(|| PathBuf::from(".")));
    let datasets = file
        .datasets
        .into_iter()
        .map(|dataset| DatasetConfig {
            path: base_dir.join(&dataset.path),
            ..dataset
        })
        .collect::<Vec<_>>();
    debug!(datasets = datasets.len(), output_dir = %output_dir.display(), "loaded config");
    Ok(AnalysisConfig {
        output_dir,
        top_k: file.top_k,
        quartiles: file.quartiles,
        datasets,
    })
}

fn validate(file: &ConfigFile) -> Result<(), String> {
    if file.datasets.is_empty() {
        return Err("no datasets configured".to_string());
    }
    if file.top_k == 0 {
        return Err("`top_k` must be at least 1".to_string());
    }
    let mut seen = BTreeSet::new();
    for dataset in &file.datasets {
        if dataset.name.trim().is_empty() {
            return Err("dataset name must not be empty".to_string());
        }
        if !seen.insert(dataset.name.as_str()) {
            return Err(format!("duplicate dataset name `{}`", dataset.name));
        }
    }
    Ok(())
}

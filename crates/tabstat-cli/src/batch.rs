//! Batch driver: load, clean, analyze and write every configured dataset.
//!
//! A failing dataset is recorded and logged; the remaining datasets still run.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tabstat_core::{SummaryOptions, analyze};
use tabstat_ingest::{CleanPipeline, clean_dataset, read_dataset};
use tabstat_model::Dataset;
use tabstat_report::{ReportFormat, write_report};
use tracing::{error, info, info_span};

use crate::config::{AnalysisConfig, DatasetConfig};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub output_dir: PathBuf,
    pub formats: Vec<ReportFormat>,
    /// Analyze without writing report files.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetStatus {
    Written(Vec<PathBuf>),
    Analyzed,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct DatasetOutcome {
    pub name: String,
    /// Data rows after loading; unset when the file could not be read.
    pub rows: Option<usize>,
    pub groups: Option<usize>,
    pub status: DatasetStatus,
}

impl DatasetOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, DatasetStatus::Failed(_))
    }
}

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub output_dir: PathBuf,
    pub outcomes: Vec<DatasetOutcome>,
}

impl BatchResult {
    pub fn has_errors(&self) -> bool {
        self.outcomes.iter().any(DatasetOutcome::is_failure)
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_failure()).count()
    }
}

/// Run every dataset in `config`, in configuration order.
pub fn run_batch(config: &AnalysisConfig, options: &BatchOptions) -> BatchResult {
    let summary_options = config.summary_options();
    let outcomes = config
        .datasets
        .iter()
        .map(|dataset| run_dataset(dataset, &summary_options, options))
        .collect::<Vec<_>>();
    let result = BatchResult {
        output_dir: options.output_dir.clone(),
        outcomes,
    };
    info!(
        datasets = result.outcomes.len(),
        failed = result.failed_count(),
        "batch complete"
    );
    result
}

fn run_dataset(
    dataset: &DatasetConfig,
    summary_options: &SummaryOptions,
    options: &BatchOptions,
) -> DatasetOutcome {
    let span = info_span!("dataset", name = %dataset.name);
    let _guard = span.enter();
    let start = Instant::now();

    let mut outcome = DatasetOutcome {
        name: dataset.name.clone(),
        rows: None,
        groups: None,
        status: DatasetStatus::Analyzed,
    };
    match process_dataset(dataset, summary_options, options, &mut outcome) {
        Ok(()) => info!(
            rows = outcome.rows,
            groups = outcome.groups,
            duration_ms = start.elapsed().as_millis(),
            "dataset complete"
        ),
        Err(err) => {
            let message = format!("{err:#}");
            error!(error = %message, "dataset failed");
            outcome.status = DatasetStatus::Failed(message);
        }
    }
    outcome
}

fn process_dataset(
    dataset: &DatasetConfig,
    summary_options: &SummaryOptions,
    options: &BatchOptions,
    outcome: &mut DatasetOutcome,
) -> Result<()> {
    let data = load_dataset(dataset)?;
    outcome.rows = Some(data.row_count());

    let report = analyze(&dataset.name, &data, &dataset.metadata, summary_options)
        .context("analyze")?;
    outcome.groups = Some(report.group_count());

    if !options.dry_run {
        let paths = write_report(&options.output_dir, &report, &options.formats)
            .context("write report")?;
        outcome.status = DatasetStatus::Written(paths);
    }
    Ok(())
}

/// Read a configured dataset and apply its clean rules.
pub fn load_dataset(dataset: &DatasetConfig) -> Result<Dataset> {
    let data = read_dataset(&dataset.path)
        .with_context(|| format!("load {}", dataset.path.display()))?;
    if dataset.clean.is_empty() {
        return Ok(data);
    }
    let pipeline =
        CleanPipeline::compile(&dataset.clean, data.header()).context("compile clean rules")?;
    clean_dataset(data, &pipeline).context("clean rows")
}

use std::time::Instant;

use tabstat_model::{Dataset, GroupSpec, Metadata, MissingPolicy, Report};
use tracing::{debug, info, info_span};

use crate::assemble::{GroupedResult, assemble_report};
use crate::error::{Declaration, EngineError, Result};
use crate::grouping::{partition, summarize_partitions};
use crate::options::SummaryOptions;
use crate::plan::ColumnPlan;

/// Run one full analysis pass over a dataset.
///
/// Returns either a fully assembled report or the first error; nothing is
/// produced for a dataset that fails validation. An empty dataset is not an
/// error: every summary simply has a count of 0.
pub fn analyze(
    name: &str,
    dataset: &Dataset,
    metadata: &Metadata,
    options: &SummaryOptions,
) -> Result<Report> {
    let span = info_span!("analyze", dataset = %name, rows = dataset.row_count());
    let _guard = span.enter();
    let start = Instant::now();

    validate_metadata(dataset, metadata)?;
    let policy = MissingPolicy::from_metadata(metadata);
    let plan = ColumnPlan::build(dataset, metadata, &policy);
    plan.check_numeric(dataset, &policy)?;
    if plan.is_empty() {
        debug!("no columns selected for summarization");
    }

    let all_rows: Vec<usize> = (0..dataset.row_count()).collect();
    let overall = plan.summarize(dataset, &all_rows, &policy, options)?;
    debug!(columns = overall.len(), "overall summary complete");

    let mut grouped = Vec::with_capacity(metadata.group_by.len());
    for spec in &metadata.group_by {
        let key_columns = resolve_key_columns(dataset, spec)?;
        let partitions = partition(dataset, &key_columns, &policy);
        debug!(
            keys = ?spec.columns(),
            groups = partitions.len(),
            "partitioned rows"
        );
        let groups = summarize_partitions(dataset, &plan, partitions, &policy, options)?;
        grouped.push(GroupedResult {
            group_keys: spec.columns().to_vec(),
            groups,
        });
    }

    let report = assemble_report(name, dataset.row_count(), overall, grouped);
    info!(
        sections = report.sections.len(),
        groups = report.group_count(),
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );
    Ok(report)
}

/// Check declared roles and group keys against the dataset header.
pub fn validate_metadata(dataset: &Dataset, metadata: &Metadata) -> Result<()> {
    if let Some(column) = metadata.role_conflicts().first() {
        return Err(EngineError::RoleConflict {
            column: (*column).to_string(),
        });
    }
    let declared = metadata
        .numeric
        .iter()
        .map(|column| (column, Declaration::Numeric))
        .chain(
            metadata
                .categorical
                .iter()
                .map(|column| (column, Declaration::Categorical)),
        );
    for (column, declared_as) in declared {
        if dataset.column_index(column).is_none() {
            return Err(EngineError::SchemaMismatch {
                column: column.clone(),
                declared_as,
            });
        }
    }
    for (idx, spec) in metadata.group_by.iter().enumerate() {
        if spec.is_empty() {
            return Err(EngineError::EmptyGroupSpec { index: idx + 1 });
        }
        resolve_key_columns(dataset, spec)?;
    }
    Ok(())
}

fn resolve_key_columns(dataset: &Dataset, spec: &GroupSpec) -> Result<Vec<usize>> {
    spec.columns()
        .iter()
        .map(|column| {
            dataset
                .column_index(column)
                .ok_or_else(|| EngineError::SchemaMismatch {
                    column: column.clone(),
                    declared_as: Declaration::GroupKey,
                })
        })
        .collect()
}

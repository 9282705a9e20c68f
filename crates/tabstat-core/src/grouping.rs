//! Row partitioning by composite keys.
//!
//! Partitions come out in the order their key was first seen while scanning
//! the rows. That order is what the report shows, so it must stay stable:
//! never sort partitions here.

use std::collections::HashMap;

use tabstat_model::{Dataset, GroupKey, GroupSummary, MissingPolicy};
use tracing::trace;

use crate::error::Result;
use crate::options::SummaryOptions;
use crate::plan::ColumnPlan;

/// The rows sharing one composite key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub key: GroupKey,
    /// Row indices, ascending.
    pub rows: Vec<usize>,
}

/// Partition the rows of `dataset` by the columns at `key_columns`.
///
/// Key components compare as exact raw strings. A key cell that the missing
/// policy treats as missing becomes `None`, so rows with a missing key are
/// kept together in one partition instead of being dropped.
pub fn partition(dataset: &Dataset, key_columns: &[usize], policy: &MissingPolicy) -> Vec<Partition> {
    let mut positions: HashMap<Vec<Option<&str>>, usize> = HashMap::new();
    let mut partitions: Vec<Partition> = Vec::new();
    for row in 0..dataset.row_count() {
        let key: Vec<Option<&str>> = key_columns
            .iter()
            .map(|&column| policy.value(dataset.cell(row, column)))
            .collect();
        if let Some(&idx) = positions.get(&key) {
            partitions[idx].rows.push(row);
            continue;
        }
        trace!(row, partition = partitions.len(), "new group key");
        partitions.push(Partition {
            key: key.iter().map(|part| part.map(str::to_string)).collect(),
            rows: vec![row],
        });
        positions.insert(key, partitions.len() - 1);
    }
    partitions
}

/// Summarize the planned columns within each partition, keeping partition order.
pub fn summarize_partitions(
    dataset: &Dataset,
    plan: &ColumnPlan,
    partitions: Vec<Partition>,
    policy: &MissingPolicy,
    options: &SummaryOptions,
) -> Result<Vec<GroupSummary>> {
    partitions
        .into_iter()
        .map(|partition| {
            let columns = plan.summarize(dataset, &partition.rows, policy, options)?;
            Ok(GroupSummary {
                key: partition.key,
                row_count: partition.rows.len(),
                columns,
            })
        })
        .collect()
}

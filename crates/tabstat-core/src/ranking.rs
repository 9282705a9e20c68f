//! Rankings over a dataset and over grouped summaries.
//!
//! [`top_rows`] orders individual rows by a numeric column; [`top_group_means`]
//! orders the partitions of one grouped section by a column mean. Both sort
//! descending and keep the earlier entry first on ties.

use tabstat_model::{Dataset, GroupKey, GroupSummary, MissingPolicy};
use tracing::debug;

use crate::classify::parse_number;
use crate::error::{Declaration, EngineError, Result};

/// One row picked by [`top_rows`].
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    /// 1-based data row number.
    pub row: usize,
    /// Cell of the label column, `None` when missing or no label was asked for.
    pub label: Option<String>,
    pub value: f64,
}

/// One partition picked by [`top_group_means`].
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGroup {
    pub key: GroupKey,
    pub mean: f64,
    pub count: usize,
}

/// The `n` rows with the largest values in column `by`.
///
/// Missing cells are skipped. A present value that is not a number fails the
/// whole ranking with [`EngineError::TypeCoercion`].
pub fn top_rows(
    dataset: &Dataset,
    by: &str,
    label: Option<&str>,
    policy: &MissingPolicy,
    n: usize,
) -> Result<Vec<RankedRow>> {
    let by_index = column_index(dataset, by, Declaration::RankBy)?;
    let label_index = label
        .map(|name| column_index(dataset, name, Declaration::RankLabel))
        .transpose()?;

    let mut ranked = Vec::new();
    for row in 0..dataset.row_count() {
        let Some(raw) = policy.value(dataset.cell(row, by_index)) else {
            continue;
        };
        let value = parse_number(raw).ok_or_else(|| EngineError::TypeCoercion {
            column: by.to_string(),
            row: row + 1,
            value: raw.to_string(),
        })?;
        let label = label_index
            .and_then(|index| policy.value(dataset.cell(row, index)))
            .map(str::to_string);
        ranked.push(RankedRow {
            row: row + 1,
            label,
            value,
        });
    }
    debug!(column = by, candidates = ranked.len(), "ranking rows");

    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked.truncate(n);
    Ok(ranked)
}

/// The `n` groups with the largest mean of `column`.
///
/// Groups where `column` is absent, categorical, or has no values are left out.
pub fn top_group_means(groups: &[GroupSummary], column: &str, n: usize) -> Vec<RankedGroup> {
    let mut ranked: Vec<RankedGroup> = groups
        .iter()
        .filter_map(|group| {
            let summary = group.column(column)?.as_numeric()?;
            (summary.count > 0).then(|| RankedGroup {
                key: group.key.clone(),
                mean: summary.mean,
                count: summary.count,
            })
        })
        .collect();
    ranked.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    ranked.truncate(n);
    ranked
}

fn column_index(dataset: &Dataset, name: &str, declared_as: Declaration) -> Result<usize> {
    dataset
        .column_index(name)
        .ok_or_else(|| EngineError::SchemaMismatch {
            column: name.to_string(),
            declared_as,
        })
}

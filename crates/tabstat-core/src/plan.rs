use tabstat_model::{ColumnEntry, ColumnRole, Dataset, Metadata, MissingPolicy};
use tracing::debug;

use crate::classify::{classify, parse_number};
use crate::column::summarize_column;
use crate::error::{EngineError, Result};
use crate::options::SummaryOptions;

/// A column selected for summarization, with its resolved role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedColumn {
    pub name: String,
    pub index: usize,
    pub role: ColumnRole,
    /// True when the role came from the classifier rather than the metadata.
    pub inferred: bool,
}

/// The columns summarized in every partition, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnPlan {
    columns: Vec<PlannedColumn>,
}

impl ColumnPlan {
    /// Resolve the role of every header column.
    ///
    /// Declared roles are taken as-is. Undeclared columns are skipped, or, when
    /// the metadata asks for it, classified once over the whole dataset so the
    /// column keeps the same role in every partition.
    pub fn build(dataset: &Dataset, metadata: &Metadata, policy: &MissingPolicy) -> Self {
        let mut columns = Vec::new();
        for (index, name) in dataset.header().iter().enumerate() {
            let (role, inferred) = match metadata.role(name) {
                Some(role) => (role, false),
                None if metadata.infer_undeclared => {
                    let values = (0..dataset.row_count())
                        .filter_map(|row| policy.value(dataset.cell(row, index)));
                    (classify(values), true)
                }
                None => continue,
            };
            if inferred {
                debug!(column = %name, role = %role, "classified undeclared column");
            }
            columns.push(PlannedColumn {
                name: name.clone(),
                index,
                role,
                inferred,
            });
        }
        Self { columns }
    }

    pub fn columns(&self) -> &[PlannedColumn] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Fail on the first declared-numeric value that does not parse.
    ///
    /// Runs over the whole dataset before any summary is built, so a bad value
    /// stops the pass before a partial report exists.
    pub fn check_numeric(&self, dataset: &Dataset, policy: &MissingPolicy) -> Result<()> {
        for column in &self.columns {
            if column.role != ColumnRole::Numeric {
                continue;
            }
            for row in 0..dataset.row_count() {
                let Some(value) = policy.value(dataset.cell(row, column.index)) else {
                    continue;
                };
                if parse_number(value).is_none() {
                    return Err(EngineError::TypeCoercion {
                        column: column.name.clone(),
                        row: row + 1,
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Summarize every planned column over one row subset.
    pub fn summarize(
        &self,
        dataset: &Dataset,
        rows: &[usize],
        policy: &MissingPolicy,
        options: &SummaryOptions,
    ) -> Result<Vec<ColumnEntry>> {
        self.columns
            .iter()
            .map(|column| {
                Ok(ColumnEntry {
                    column: column.name.clone(),
                    summary: summarize_column(dataset, column, rows, policy, options)?,
                })
            })
            .collect()
    }
}

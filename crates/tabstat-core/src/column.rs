use tabstat_model::{ColumnRole, ColumnSummary, Dataset, MissingPolicy};

use crate::categorical::summarize_categorical;
use crate::classify::parse_number;
use crate::error::{EngineError, Result};
use crate::numeric::summarize_numeric;
use crate::options::SummaryOptions;
use crate::plan::PlannedColumn;

/// Summarize one column's cells under a fixed role.
///
/// `cells` yields `(row index, raw cell)` pairs. Each cell goes through the
/// missing policy exactly once; the surviving values feed whichever summarizer
/// the role selects. For numeric columns a value that does not parse is an
/// error, reported with its 1-based row number.
pub fn summarize_values<'a, I>(
    column: &str,
    role: ColumnRole,
    cells: I,
    policy: &MissingPolicy,
    options: &SummaryOptions,
) -> Result<ColumnSummary>
where
    I: IntoIterator<Item = (usize, Option<&'a str>)>,
{
    let mut missing = 0usize;
    let mut present: Vec<(usize, &str)> = Vec::new();
    for (row, cell) in cells {
        match policy.value(cell) {
            Some(value) => present.push((row, value)),
            None => missing += 1,
        }
    }

    match role {
        ColumnRole::Numeric => {
            let mut numbers = Vec::with_capacity(present.len());
            for (row, value) in present {
                let Some(number) = parse_number(value) else {
                    return Err(EngineError::TypeCoercion {
                        column: column.to_string(),
                        row: row + 1,
                        value: value.to_string(),
                    });
                };
                numbers.push(number);
            }
            Ok(ColumnSummary::Numeric(summarize_numeric(
                &numbers, missing, options,
            )))
        }
        ColumnRole::Categorical => {
            let values: Vec<&str> = present.into_iter().map(|(_, value)| value).collect();
            Ok(ColumnSummary::Categorical(summarize_categorical(
                &values,
                missing,
                options.top_k,
            )))
        }
    }
}

/// Summarize a planned column of `dataset` over the given row subset.
pub fn summarize_column(
    dataset: &Dataset,
    column: &PlannedColumn,
    rows: &[usize],
    policy: &MissingPolicy,
    options: &SummaryOptions,
) -> Result<ColumnSummary> {
    summarize_values(
        &column.name,
        column.role,
        rows.iter().map(|&row| (row, dataset.cell(row, column.index))),
        policy,
        options,
    )
}

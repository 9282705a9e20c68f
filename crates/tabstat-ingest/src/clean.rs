//! Row cleaning applied before analysis.
//!
//! Real exports need per-dataset fixes (thousands separators, currency signs,
//! stray whitespace) before their values parse. Those fixes are expressed as
//! [`CleanRule`]s, compiled against a header into a [`CleanPipeline`], and
//! applied through the [`Cleaner`] trait so the engine never sees them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tabstat_core::parse_number;
use tabstat_model::{Dataset, Row};
use tracing::debug;

use crate::error::{IngestError, Result};

/// A row-to-row pre-processing step.
pub trait Cleaner {
    fn clean_row(&self, row: Row) -> Row;
}

impl<F> Cleaner for F
where
    F: Fn(Row) -> Row,
{
    fn clean_row(&self, row: Row) -> Row {
        self(row)
    }
}

/// Leaves rows untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCleaner;

impl Cleaner for NoopCleaner {
    fn clean_row(&self, row: Row) -> Row {
        row
    }
}

/// Apply `cleaner` to every row of `dataset`.
///
/// Fails if the cleaner changes a row's width.
pub fn clean_dataset(dataset: Dataset, cleaner: &dyn Cleaner) -> Result<Dataset> {
    let (header, rows) = dataset.into_parts();
    let rows = rows.into_iter().map(|row| cleaner.clean_row(row)).collect();
    Ok(Dataset::new(header, rows)?)
}

/// Declarative cleaning step, as written in dataset configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CleanRule {
    /// Strip surrounding whitespace (all columns when `columns` is omitted).
    Trim {
        #[serde(default)]
        columns: Option<Vec<String>>,
    },
    /// Delete every occurrence of each character in `chars`.
    RemoveChars { column: String, chars: String },
    /// Replace every occurrence of `from` with `to`.
    Replace {
        column: String,
        from: String,
        to: String,
    },
    /// Mark values that do not parse as numbers as missing.
    CoerceNumeric { column: String },
    /// Mark exact matches of `values` as missing (all columns when `columns` is omitted).
    NullIf {
        #[serde(default)]
        columns: Option<Vec<String>>,
        values: Vec<String>,
    },
}

impl CleanRule {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Trim { .. } => "trim",
            Self::RemoveChars { .. } => "remove_chars",
            Self::Replace { .. } => "replace",
            Self::CoerceNumeric { .. } => "coerce_numeric",
            Self::NullIf { .. } => "null_if",
        }
    }
}

#[derive(Debug, Clone)]
enum CompiledRule {
    Trim(Vec<usize>),
    RemoveChars { column: usize, chars: Vec<char> },
    Replace { column: usize, from: String, to: String },
    CoerceNumeric(usize),
    NullIf { columns: Vec<usize>, values: BTreeSet<String> },
}

impl CompiledRule {
    fn apply(&self, row: &mut Row) {
        match self {
            Self::Trim(columns) => {
                for &column in columns {
                    map_present(row, column, |value| {
                        let trimmed = value.trim();
                        (trimmed.len() != value.len()).then(|| trimmed.to_string())
                    });
                }
            }
            Self::RemoveChars { column, chars } => map_present(row, *column, |value| {
                value
                    .contains(chars.as_slice())
                    .then(|| value.chars().filter(|ch| !chars.contains(ch)).collect())
            }),
            Self::Replace { column, from, to } => map_present(row, *column, |value| {
                value.contains(from.as_str()).then(|| value.replace(from.as_str(), to))
            }),
            Self::CoerceNumeric(column) => {
                if let Some(cell) = row.get_mut(*column)
                    && cell.as_deref().is_some_and(|value| parse_number(value).is_none())
                {
                    *cell = None;
                }
            }
            Self::NullIf { columns, values } => {
                for &column in columns {
                    if let Some(cell) = row.get_mut(column)
                        && cell.as_ref().is_some_and(|value| values.contains(value))
                    {
                        *cell = None;
                    }
                }
            }
        }
    }
}

/// Rewrite a present cell when `f` returns a new value.
fn map_present<F>(row: &mut Row, column: usize, f: F)
where
    F: FnOnce(&str) -> Option<String>,
{
    if let Some(Some(value)) = row.get_mut(column)
        && let Some(updated) = f(value.as_str())
    {
        *value = updated;
    }
}

/// Clean rules with their column names resolved against one header.
#[derive(Debug, Clone, Default)]
pub struct CleanPipeline {
    rules: Vec<CompiledRule>,
}

impl CleanPipeline {
    pub fn compile(rules: &[CleanRule], header: &[String]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            let name = rule.name();
            let resolve = |column: &str| {
                header
                    .iter()
                    .position(|candidate| candidate == column)
                    .ok_or_else(|| IngestError::UnknownColumn {
                        rule: name,
                        column: column.to_string(),
                    })
            };
            let resolve_many = |columns: &Option<Vec<String>>| match columns {
                Some(columns) => columns.iter().map(|column| resolve(column)).collect(),
                None => Ok((0..header.len()).collect::<Vec<_>>()),
            };
            let rule = match rule {
                CleanRule::Trim { columns } => CompiledRule::Trim(resolve_many(columns)?),
                CleanRule::RemoveChars { column, chars } => {
                    if chars.is_empty() {
                        return Err(IngestError::InvalidCleanRule {
                            rule: name,
                            reason: "`chars` must not be empty".to_string(),
                        });
                    }
                    CompiledRule::RemoveChars {
                        column: resolve(column)?,
                        chars: chars.chars().collect(),
                    }
                }
                CleanRule::Replace { column, from, to } => {
                    if from.is_empty() {
                        return Err(IngestError::InvalidCleanRule {
                            rule: name,
                            reason: "`from` must not be empty".to_string(),
                        });
                    }
                    CompiledRule::Replace {
                        column: resolve(column)?,
                        from: from.clone(),
                        to: to.clone(),
                    }
                }
                CleanRule::CoerceNumeric { column } => {
                    CompiledRule::CoerceNumeric(resolve(column)?)
                }
                CleanRule::NullIf { columns, values } => CompiledRule::NullIf {
                    columns: resolve_many(columns)?,
                    values: values.iter().cloned().collect(),
                },
            };
            compiled.push(rule);
        }
        debug!(rules = compiled.len(), "compiled clean rules");
        Ok(Self { rules: compiled })
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Cleaner for CleanPipeline {
    fn clean_row(&self, mut row: Row) -> Row {
        for rule in &self.rules {
            rule.apply(&mut row);
        }
        row
    }
}

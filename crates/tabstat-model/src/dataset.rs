use std::collections::BTreeSet;

use crate::error::{ModelError, Result};

/// A single raw value. `None` marks a value that is explicitly missing.
pub type Cell = Option<String>;

/// One data row, positionally aligned with [`Dataset::header`].
pub type Row = Vec<Cell>;

/// An in-memory table of raw string values.
///
/// Every row is guaranteed to have exactly one cell per header column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    header: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(header: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for name in &header {
            if !seen.insert(name.as_str()) {
                return Err(ModelError::DuplicateColumn {
                    column: name.clone(),
                });
            }
        }
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != header.len() {
                return Err(ModelError::RowWidth {
                    row: idx + 1,
                    expected: header.len(),
                    actual: row.len(),
                });
            }
        }
        Ok(Self { header, rows })
    }

    /// Build a dataset where every value is present (no explicit missing markers).
    pub fn from_strings<H, R, V>(header: H, rows: R) -> Result<Self>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = V>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let header = header.into_iter().map(Into::into).collect();
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|value| Some(value.into())).collect())
            .collect();
        Self::new(header, rows)
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|column| column == name)
    }

    /// Raw value at `(row, column)`; `None` for explicit missing or out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .and_then(Option::as_deref)
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Row>) {
        (self.header, self.rows)
    }
}

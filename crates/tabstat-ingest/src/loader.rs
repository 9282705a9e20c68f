//! CSV loading into a [`Dataset`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tabstat_model::{Dataset, Row};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Read a CSV file whose first record is the header.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_dataset_from_reader(file, path)
}

/// Read CSV data from any reader. `label` names the source in errors.
///
/// Cells are kept as raw strings; value cleaning is a separate step. Short
/// records are padded with missing cells, long records are truncated, and
/// records whose every cell is blank are dropped.
pub fn read_dataset_from_reader<R: Read>(reader: R, label: &Path) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = reader.records();

    let header: Vec<String> = match records.next() {
        Some(record) => record
            .map_err(|e| csv_error(label, &e))?
            .iter()
            .map(normalize_header)
            .collect(),
        None => {
            return Err(IngestError::EmptyCsv {
                path: label.to_path_buf(),
            });
        }
    };

    let mut rows: Vec<Row> = Vec::new();
    let mut blank_rows = 0usize;
    for (idx, record) in records.enumerate() {
        let record = record.map_err(|e| csv_error(label, &e))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            blank_rows += 1;
            continue;
        }
        if record.len() > header.len() {
            warn!(
                source = %label.display(),
                record = idx + 2,
                values = record.len(),
                columns = header.len(),
                "record has more values than header columns; extra values dropped"
            );
        }
        let row: Row = (0..header.len())
            .map(|col| record.get(col).map(str::to_string))
            .collect();
        rows.push(row);
    }

    debug!(
        source = %label.display(),
        columns = header.len(),
        rows = rows.len(),
        blank_rows,
        "loaded CSV"
    );
    Ok(Dataset::new(header, rows)?)
}

fn csv_error(label: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: label.to_path_buf(),
        message: error.to_string(),
    }
}

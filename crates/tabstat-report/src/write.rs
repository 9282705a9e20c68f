use std::fmt;
use std::path::{Path, PathBuf};

use tabstat_model::Report;
use tracing::{debug, info};

use crate::error::{ReportError, Result};
use crate::json::render_json;
use crate::text::render_text;

/// Output encodings a report can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }

    pub fn render(self, report: &Report) -> Result<String> {
        match self {
            Self::Text => Ok(render_text(report)),
            Self::Json => render_json(report),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// File name for a dataset's report: lowercased, spaces and path
/// separators replaced by `_`, suffixed with `_report.<ext>`.
pub fn report_file_name(dataset: &str, format: ReportFormat) -> String {
    let stem: String = dataset
        .to_lowercase()
        .chars()
        .map(|ch| match ch {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    format!("{stem}_report.{}", format.extension())
}

/// Write `report` into `output_dir` once per format, creating the directory
/// when needed. Every format is rendered before anything is written.
pub fn write_report(
    output_dir: &Path,
    report: &Report,
    formats: &[ReportFormat],
) -> Result<Vec<PathBuf>> {
    let mut rendered = Vec::with_capacity(formats.len());
    for &format in formats {
        let path = output_dir.join(report_file_name(&report.dataset, format));
        rendered.push((path, format.render(report)?));
    }

    std::fs::create_dir_all(output_dir).map_err(|source| ReportError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(rendered.len());
    for (path, contents) in rendered {
        std::fs::write(&path, contents).map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "wrote report file");
        written.push(path);
    }
    info!(dataset = %report.dataset, files = written.len(), "report written");
    Ok(written)
}

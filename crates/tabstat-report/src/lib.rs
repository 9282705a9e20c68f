//! Report rendering and output.
//!
//! A [`tabstat_model::Report`] renders either as the plain-text layout
//! ([`render_text`]) or as pretty JSON ([`render_json`]). [`write_report`]
//! puts one file per requested [`ReportFormat`] into an output directory.

mod error;
mod json;
mod text;
mod write;

pub use error::{ReportError, Result};
pub use json::render_json;
pub use text::{TextReport, format_number, render_text};
pub use write::{ReportFormat, report_file_name, write_report};

//! Data model shared by the tabstat crates.
//!
//! - [`Dataset`]: header plus rows of raw string cells
//! - [`Metadata`]: declared column roles and grouping dimensions
//! - [`ColumnSummary`]: per-column statistics
//! - [`Report`]: overall and grouped sections, ready for rendering

pub mod dataset;
pub mod error;
pub mod metadata;
pub mod missing;
pub mod report;
pub mod summary;

pub use dataset::{Cell, Dataset, Row};
pub use error::{ModelError, Result};
pub use metadata::{ColumnRole, GroupSpec, Metadata};
pub use missing::MissingPolicy;
pub use report::{ColumnEntry, GroupKey, GroupSummary, Report, Section, find_column};
pub use summary::{CategoricalSummary, ColumnSummary, NumericSummary, Quartiles, ValueCount};

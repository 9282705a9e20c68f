//! Descriptive statistics engine for tabular datasets.
//!
//! The engine takes a [`Dataset`](tabstat_model::Dataset) and its
//! [`Metadata`](tabstat_model::Metadata) and produces a
//! [`Report`](tabstat_model::Report) in one synchronous pass:
//!
//! 1. validate declared roles against the header
//! 2. resolve a role for every summarized column
//! 3. summarize all rows (the overall section)
//! 4. for each group-by entry, partition rows and summarize each partition
//! 5. assemble the sections in declaration order
//!
//! # Example
//!
//! ```
//! use tabstat_core::{SummaryOptions, analyze};
//! use tabstat_model::{Dataset, GroupSpec, Metadata};
//!
//! let dataset = Dataset::from_strings(
//!     ["team", "score"],
//!     [["A", "10"], ["A", "20"], ["B", ""]],
//! )
//! .unwrap();
//! let metadata = Metadata::new()
//!     .with_numeric(["score"])
//!     .with_group_by(GroupSpec::new(["team"]));
//! let report = analyze("demo", &dataset, &metadata, &SummaryOptions::default()).unwrap();
//! assert_eq!(report.group_count(), 2);
//! ```

pub mod assemble;
pub mod categorical;
pub mod classify;
pub mod column;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod numeric;
pub mod options;
pub mod plan;
pub mod ranking;

pub use assemble::{GroupedResult, assemble_report};
pub use categorical::{summarize_categorical, value_frequencies};
pub use classify::{classify, parse_number};
pub use column::{summarize_column, summarize_values};
pub use engine::{analyze, validate_metadata};
pub use error::{Declaration, EngineError, Result};
pub use grouping::{Partition, partition, summarize_partitions};
pub use numeric::summarize_numeric;
pub use options::{DEFAULT_TOP_K, SummaryOptions};
pub use plan::{ColumnPlan, PlannedColumn};
pub use ranking::{RankedGroup, RankedRow, top_group_means, top_rows};

//! Dataset ingestion for tabstat.
//!
//! # Features
//!
//! - **CSV Loading**: read a CSV file (header in the first record) into a
//!   [`Dataset`](tabstat_model::Dataset), dropping all-blank records
//! - **Cleaning**: per-dataset [`CleanRule`]s compiled into a [`CleanPipeline`]
//!   and applied through the [`Cleaner`] trait before analysis
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tabstat_ingest::{CleanPipeline, CleanRule, clean_dataset, read_dataset};
//!
//! let dataset = read_dataset(Path::new("data/googleplaystore.csv"))?;
//! let rules = [CleanRule::Trim { columns: None }];
//! let pipeline = CleanPipeline::compile(&rules, dataset.header())?;
//! let dataset = clean_dataset(dataset, &pipeline)?;
//! ```

mod clean;
mod error;
mod loader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use loader::{read_dataset, read_dataset_from_reader};

// === Cleaning ===
pub use clean::{CleanPipeline, CleanRule, Cleaner, NoopCleaner, clean_dataset};

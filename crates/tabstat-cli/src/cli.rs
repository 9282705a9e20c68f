//! CLI argument definitions.

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tabstat_core::DEFAULT_TOP_K;

#[derive(Parser)]
#[command(
    name = "tabstat",
    version,
    about = "Descriptive statistics for CSV datasets",
    long_about = "Summarize CSV datasets column by column, overall and per group.\n\n\
                  Numeric columns get count, mean, min, max and standard deviation;\n\
                  categorical columns get count, unique, top value and frequencies."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze every dataset listed in a TOML configuration file.
    Run(RunArgs),

    /// Analyze a single CSV file and print the report.
    Describe(DescribeArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the TOML configuration file.
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output directory for reports (overrides `output_dir` in the config).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report formats to write.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,

    /// Analyze and summarize without writing report files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct DescribeArgs {
    /// Path to the CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Dataset name used in the report heading (default: file stem).
    #[arg(long = "name")]
    pub name: Option<String>,

    /// Columns to summarize as numeric.
    #[arg(long = "numeric", value_delimiter = ',', value_name = "COLUMNS")]
    pub numeric: Vec<String>,

    /// Columns to summarize as categorical.
    #[arg(long = "categorical", value_delimiter = ',', value_name = "COLUMNS")]
    pub categorical: Vec<String>,

    /// Grouping dimension as comma-separated key columns; repeat for more.
    #[arg(long = "group-by", value_name = "COLUMNS")]
    pub group_by: Vec<String>,

    /// Also profile undeclared columns, inferring their role from the data.
    ///
    /// Implied when neither --numeric nor --categorical is given.
    #[arg(long = "infer")]
    pub infer: bool,

    /// Extra token treated as missing; repeat for more.
    #[arg(long = "na", value_name = "TOKEN")]
    pub na: Vec<String>,

    /// Number of most frequent values listed for categorical columns.
    #[arg(
        long = "top-k",
        value_name = "N",
        default_value_t = DEFAULT_TOP_K,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub top_k: usize,

    /// Include quartiles in numeric summaries.
    #[arg(long = "quartiles")]
    pub quartiles: bool,

    /// Print the report as JSON instead of text.
    #[arg(long = "json")]
    pub json: bool,

    /// Numeric column to rank rows and group means by (text output only).
    #[arg(long = "rank-by", value_name = "COLUMN", conflicts_with = "json")]
    pub rank_by: Option<String>,

    /// Column naming each ranked row.
    #[arg(long = "label", value_name = "COLUMN", requires = "rank_by")]
    pub label: Option<String>,

    /// Number of rows and groups listed per ranking.
    #[arg(
        long = "rank-top",
        value_name = "N",
        default_value_t = DEFAULT_RANK_TOP,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub rank_top: usize,
}

pub const DEFAULT_RANK_TOP: usize = 10;

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Json,
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

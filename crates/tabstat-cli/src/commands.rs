use anyhow::{Context, Result};
use tabstat_cli::batch::{BatchOptions, BatchResult, run_batch};
use tabstat_cli::config::load_config;
use tabstat_core::{SummaryOptions, analyze, top_group_means, top_rows};
use tabstat_ingest::read_dataset;
use tabstat_model::{Dataset, GroupSpec, Metadata, MissingPolicy, Report};
use tabstat_report::{ReportFormat, render_json, render_text};
use tracing::{debug, info, info_span};

use crate::cli::{DescribeArgs, ReportFormatArg, RunArgs};
use crate::rankings::{group_mean_table, row_table};

pub fn run_config(args: &RunArgs) -> Result<BatchResult> {
    let config = load_config(&args.config).context("load config")?;
    let span = info_span!("run", config = %args.config.display());
    let _guard = span.enter();
    let options = BatchOptions {
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| config.output_dir.clone()),
        formats: report_formats(args.format),
        dry_run: args.dry_run,
    };
    info!(
        datasets = config.datasets.len(),
        dry_run = options.dry_run,
        "starting batch"
    );
    Ok(run_batch(&config, &options))
}

pub fn run_describe(args: &DescribeArgs) -> Result<()> {
    let dataset = read_dataset(&args.csv).context("load dataset")?;
    let name = args.name.clone().unwrap_or_else(|| {
        args.csv
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dataset".to_string())
    });
    let metadata = describe_metadata(args);
    let options = SummaryOptions::default()
        .with_top_k(args.top_k)
        .with_quartiles(args.quartiles);

    let report = analyze(&name, &dataset, &metadata, &options).context("analyze")?;
    let rendered = if args.json {
        render_json(&report).context("render report")?
    } else {
        render_text(&report)
    };
    print!("{rendered}");

    if let Some(by) = &args.rank_by {
        print_rankings(&dataset, &report, &metadata, by, args)?;
    }
    Ok(())
}

fn print_rankings(
    dataset: &Dataset,
    report: &Report,
    metadata: &Metadata,
    by: &str,
    args: &DescribeArgs,
) -> Result<()> {
    let policy = MissingPolicy::from_metadata(metadata);
    let rows = top_rows(dataset, by, args.label.as_deref(), &policy, args.rank_top)
        .context("rank rows")?;
    debug!(column = by, rows = rows.len(), "ranked rows");
    println!();
    println!("Top {} rows by {by}:", args.rank_top);
    println!("{}", row_table(&rows, by, args.label.as_deref()));

    for (keys, groups) in report.grouped() {
        let ranked = top_group_means(groups, by, args.rank_top);
        if ranked.is_empty() {
            continue;
        }
        println!();
        println!("Mean {by} by ({}):", keys.join(", "));
        println!("{}", group_mean_table(&ranked, keys, by));
    }
    Ok(())
}

/// Undeclared columns are profiled when `--infer` is set or nothing is declared.
/// A `--rank-by` column not declared otherwise is summarized as numeric.
fn describe_metadata(args: &DescribeArgs) -> Metadata {
    let declared = !args.numeric.is_empty() || !args.categorical.is_empty();
    let rank_column = args.rank_by.iter().filter(|column| {
        !args.numeric.contains(*column) && !args.categorical.contains(*column)
    });
    let mut metadata = Metadata::new()
        .with_numeric(args.numeric.iter().chain(rank_column).cloned())
        .with_categorical(args.categorical.iter().cloned())
        .with_infer_undeclared(args.infer || !declared)
        .with_na_values(args.na.iter().cloned());
    for spec in &args.group_by {
        let columns = spec
            .split(',')
            .map(str::trim)
            .filter(|column| !column.is_empty());
        metadata = metadata.with_group_by(GroupSpec::new(columns));
    }
    metadata
}

fn report_formats(format: ReportFormatArg) -> Vec<ReportFormat> {
    match format {
        ReportFormatArg::Text => vec![ReportFormat::Text],
        ReportFormatArg::Json => vec![ReportFormat::Json],
        ReportFormatArg::Both => vec![ReportFormat::Text, ReportFormat::Json],
    }
}

use anyhow::{Context, Result};
use comptab_ingest::{
    ReadOptions, count_data_lines, count_lines, read_composite_table, read_table_frame,
};
use tracing::{info, info_span};

use crate::cli::{ArrayArgs, CountArgs, InspectArgs};
use crate::summary::{ArraySummary, LineCounts, TableSummary};

pub fn run_inspect(args: &InspectArgs) -> Result<TableSummary> {
    let source = args.file.display().to_string();
    let span = info_span!("inspect", file = %source);
    let _guard = span.enter();

    let options = args.reader.read_options();
    let table = read_composite_table(&args.file, &options)
        .with_context(|| format!("read composite table {source}"))?;
    info!(
        rows = table.n_rows(),
        columns = table.n_cols(),
        warnings = table.warnings.len(),
        "table read"
    );
    Ok(TableSummary::from_table(source, &table))
}

pub fn run_count(args: &CountArgs) -> Result<LineCounts> {
    let total = count_lines(&args.file)
        .with_context(|| format!("count lines in {}", args.file.display()))?;
    let data = count_data_lines(&args.file, &args.skip)
        .with_context(|| format!("count data lines in {}", args.file.display()))?;
    Ok(LineCounts { total, data })
}

pub fn run_array(args: &ArrayArgs) -> Result<ArraySummary> {
    let source = args.file.display().to_string();
    let span = info_span!("array", file = %source);
    let _guard = span.enter();

    let mut options = ReadOptions::default()
        .with_skip(args.skip.clone())
        .with_delimiter(args.delimiter);
    if let Some(row) = args.header_row {
        options = options.with_column_row(row);
    }
    let frame = read_table_frame(&args.file, &options)
        .with_context(|| format!("read float table {source}"))?;
    let (rows, columns) = frame.shape();
    info!(rows, columns, "array read");
    Ok(ArraySummary::from_frame(source, &frame))
}

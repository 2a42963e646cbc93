//! Composite and all-float table readers.
//!
//! Both file and in-memory readers run the same pipeline: classify lines,
//! split them into fields, sniff column kinds from the first data row,
//! materialize every column, then optionally expand sub-list columns.

use std::path::Path;

use comptab_model::{ArrayDataFrame, Column, ColumnKind, ListDataFrame};
use ndarray::Array2;
use tracing::{debug, debug_span};

use crate::classify::{data_lines, header_names};
use crate::error::{IngestError, IngestWarning, Result};
use crate::expand::{expand_names, expand_sub_lists};
use crate::materialize::materialize_column;
use crate::options::{ReadOptions, SubListMode};
use crate::sniff::{parse_float, sniff_columns};
use crate::source::{FileSource, LineSource, SourceLines, TextSource};
use crate::tokenize::split_fields;

/// A table read with per-column type detection.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeTable {
    /// Converted columns, after any sub-list expansion.
    pub columns: Vec<Column>,
    /// Header names, when a header row was requested and found.
    pub names: Option<Vec<String>>,
    /// Kind of each column as it appeared in the source, before expansion.
    pub kinds: Vec<ColumnKind>,
    pub warnings: Vec<IngestWarning>,
}

impl CompositeTable {
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Wrap the columns and names in a [`ListDataFrame`].
    pub fn into_frame(self) -> Result<ListDataFrame> {
        Ok(ListDataFrame::new(self.columns, self.names)?)
    }
}

/// Read a composite table from a file.
pub fn read_composite_table(path: &Path, options: &ReadOptions) -> Result<CompositeTable> {
    read_composite(FileSource::new(path), options)
}

/// Read a composite table from lines already in memory.
///
/// Trailing newlines on each line are ignored. The header row counts against
/// `lines`.
pub fn read_composite_table_from_text<S: AsRef<str>>(
    lines: &[S],
    options: &ReadOptions,
) -> Result<CompositeTable> {
    read_composite(TextSource::new(lines), options)
}

fn read_composite(source: impl LineSource, options: &ReadOptions) -> Result<CompositeTable> {
    let source_name = source.describe();
    let span = debug_span!("read_composite", source = %source_name);
    let _guard = span.enter();

    let SourceLines { lines, total_rows } = source.load()?;
    let rows = split_rows(&lines, options, &source_name)?;
    let first_row = rows.first().ok_or_else(|| IngestError::NoDataLines {
        source_name: source_name.clone(),
    })?;
    let kinds = sniff_columns(first_row, options);
    debug!(rows = rows.len(), columns = kinds.len(), "sniffed column kinds");

    let mut columns = Vec::with_capacity(kinds.len());
    for (column, &kind) in kinds.iter().enumerate() {
        let values: Vec<&str> = rows.iter().map(|row| row[column]).collect();
        columns.push(materialize_column(
            &values,
            kind,
            column,
            options.blank_value,
        )?);
    }

    let mut names = options.column_row.and_then(|row| {
        header_names(&lines, total_rows, row, &options.skip, options.delimiter)
    });
    let mut warnings = Vec::new();
    if options.sub_lists == SubListMode::Expand {
        let sub_list_columns: Vec<(usize, usize)> = kinds
            .iter()
            .enumerate()
            .filter_map(|(column, kind)| match kind {
                ColumnKind::SubList(arity) => Some((column, *arity)),
                _ => None,
            })
            .collect();
        if !sub_list_columns.is_empty() {
            expand_sub_lists(&mut columns)?;
            if let Some(names) = names.as_mut() {
                warnings = expand_names(
                    names,
                    &sub_list_columns,
                    options.sub_list_suffixes.as_deref(),
                );
            }
        }
    }

    Ok(CompositeTable {
        columns,
        names,
        kinds,
        warnings,
    })
}

/// Split the data lines into rows of exactly as many fields as the first one.
fn split_rows<'a>(
    lines: &'a [String],
    options: &ReadOptions,
    source_name: &str,
) -> Result<Vec<Vec<&'a str>>> {
    let accepted = data_lines(lines, &options.skip);
    debug!(accepted = accepted.len(), total = lines.len(), "classified lines");
    if accepted.is_empty() {
        return Err(IngestError::NoDataLines {
            source_name: source_name.to_string(),
        });
    }

    let mut rows: Vec<Vec<&str>> = Vec::with_capacity(accepted.len());
    let mut expected = 0;
    for (row, line) in accepted.into_iter().enumerate() {
        let mut fields = split_fields(line, options.delimiter);
        if row == 0 {
            expected = fields.len();
        } else if fields.len() < expected {
            return Err(IngestError::RaggedRow {
                row,
                expected,
                found: fields.len(),
            });
        }
        fields.truncate(expected);
        rows.push(fields);
    }
    Ok(rows)
}

/// Read a table in which every cell is a float.
///
/// Only `skip` and `delimiter` from `options` apply. Any unparsable cell is an
/// error.
pub fn read_table_array(path: &Path, options: &ReadOptions) -> Result<Array2<f64>> {
    let source = FileSource::new(path);
    let source_name = source.describe();
    let SourceLines { lines, .. } = source.load()?;
    table_array(&lines, options, &source_name)
}

/// In-memory counterpart of [`read_table_array`].
pub fn read_table_array_from_text<S: AsRef<str>>(
    lines: &[S],
    options: &ReadOptions,
) -> Result<Array2<f64>> {
    let source = TextSource::new(lines);
    let source_name = source.describe();
    let SourceLines { lines, .. } = source.load()?;
    table_array(&lines, options, &source_name)
}

/// Read an all-float table into an [`ArrayDataFrame`], naming the columns from
/// `options.column_row` when set.
pub fn read_table_frame(path: &Path, options: &ReadOptions) -> Result<ArrayDataFrame> {
    let source = FileSource::new(path);
    let source_name = source.describe();
    let SourceLines { lines, total_rows } = source.load()?;
    let data = table_array(&lines, options, &source_name)?;
    let names = options.column_row.and_then(|row| {
        header_names(&lines, total_rows, row, &options.skip, options.delimiter)
    });
    Ok(ArrayDataFrame::new(data, names))
}

fn table_array(lines: &[String], options: &ReadOptions, source_name: &str) -> Result<Array2<f64>> {
    let rows = split_rows(lines, options, source_name)?;
    let n_cols = rows.first().map_or(0, Vec::len);
    let mut data = Array2::<f64>::zeros((rows.len(), n_cols));
    for (row, fields) in rows.iter().enumerate() {
        for (column, value) in fields.iter().enumerate() {
            data[[row, column]] = parse_float(value).ok_or_else(|| IngestError::FloatParse {
                column,
                row,
                value: (*value).to_string(),
            })?;
        }
    }
    debug!(rows = data.nrows(), columns = n_cols, "read float table");
    Ok(data)
}

//! Conversion of raw column values into typed columns.

use comptab_model::{Column, ColumnKind};
use ndarray::Array1;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::sniff::parse_float;

/// Convert one column's raw values according to its kind.
///
/// `column` is the original column position, used in error reports.
pub fn materialize_column(
    values: &[&str],
    kind: ColumnKind,
    column: usize,
    blank_value: f64,
) -> Result<Column> {
    let converted = match kind {
        ColumnKind::Integer => Column::Int(column_to_ints(values, column)?),
        ColumnKind::Float => Column::Float(column_to_floats(values, blank_value)),
        ColumnKind::SubList(n) => Column::SubList(extract_sub_lists(values, n, column)?),
        ColumnKind::Verbatim => Column::Text(values.iter().map(ToString::to_string).collect()),
    };
    Ok(converted)
}

/// Every value must be an integer.
pub fn column_to_ints(values: &[&str], column: usize) -> Result<Array1<i64>> {
    values
        .iter()
        .enumerate()
        .map(|(row, value)| {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| IngestError::IntegerParse {
                    column,
                    row,
                    value: (*value).to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()
        .map(Array1::from)
}

/// Parse a column as floats, replacing unparsable entries with `blank_value`.
///
/// The whole column is tried first; only when that fails is it re-parsed
/// element by element.
pub fn column_to_floats<S: AsRef<str>>(values: &[S], blank_value: f64) -> Array1<f64> {
    let parsed: Option<Vec<f64>> = values.iter().map(|value| parse_float(value.as_ref())).collect();
    if let Some(parsed) = parsed {
        return Array1::from(parsed);
    }

    let mut blanks = 0usize;
    let substituted: Vec<f64> = values
        .iter()
        .map(|value| {
            parse_float(value.as_ref()).unwrap_or_else(|| {
                blanks += 1;
                blank_value
            })
        })
        .collect();
    debug!(blanks, blank_value, "substituted blank value in float column");
    Array1::from(substituted)
}

/// Split `{x1,...,xn}` values into `n` arrays, one per sub-list position.
///
/// Elements past the n-th are ignored; a missing or non-numeric element is an
/// error. `column` is only used in error reports.
pub fn extract_sub_lists<S: AsRef<str>>(
    values: &[S],
    n: usize,
    column: usize,
) -> Result<Vec<Array1<f64>>> {
    let mut parts: Vec<Vec<f64>> = vec![Vec::with_capacity(values.len()); n];
    for (row, value) in values.iter().enumerate() {
        let bare = value
            .as_ref()
            .trim()
            .trim_start_matches('{')
            .trim_end_matches('}');
        let pieces: Vec<&str> = bare.split(',').collect();
        if pieces.len() < n {
            return Err(IngestError::SubListArity {
                column,
                row,
                expected: n,
                found: pieces.len(),
            });
        }
        for (part, piece) in parts.iter_mut().zip(&pieces) {
            let number = parse_float(piece).ok_or_else(|| IngestError::SubListParse {
                column,
                row,
                value: (*piece).to_string(),
            })?;
            part.push(number);
        }
    }
    Ok(parts.into_iter().map(Array1::from).collect())
}

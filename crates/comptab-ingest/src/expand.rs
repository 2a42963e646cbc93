//! In-place expansion of sub-list columns into sibling float columns.

use std::ops::Range;

use comptab_model::Column;
use tracing::{debug, warn};

use crate::error::{IngestError, IngestWarning, Result};

/// Replace the element at `index` with `replacements`, shifting everything
/// after it.
///
/// Fails without touching `items` when `index` is not a valid position.
pub fn insert_and_replace<T>(
    items: &mut Vec<T>,
    index: usize,
    replacements: impl IntoIterator<Item = T>,
) -> Result<()> {
    if index >= items.len() {
        return Err(IngestError::InsertOutOfRange {
            index,
            len: items.len(),
        });
    }
    items.splice(index..=index, replacements);
    Ok(())
}

/// Replace every sub-list column with one float column per sub-list position.
///
/// Columns are visited in their original order. The returned table maps each
/// original column index to the range of positions it now occupies.
pub fn expand_sub_lists(columns: &mut Vec<Column>) -> Result<Vec<Range<usize>>> {
    let n_original = columns.len();
    let mut placement: Vec<Range<usize>> = Vec::with_capacity(n_original);
    for original in 0..n_original {
        let current = placement.last().map_or(0, |range| range.end);
        let parts = match columns.get_mut(current) {
            Some(Column::SubList(parts)) => std::mem::take(parts),
            Some(_) => {
                placement.push(current..current + 1);
                continue;
            }
            None => {
                return Err(IngestError::InsertOutOfRange {
                    index: current,
                    len: columns.len(),
                });
            }
        };
        let width = parts.len();
        insert_and_replace(columns, current, parts.into_iter().map(Column::Float))?;
        debug!(original, current, width, "expanded sub-list column");
        placement.push(current..current + width);
    }
    Ok(placement)
}

/// Replace the header name of each expanded column with `<name>_<suffix>`
/// names.
///
/// `sub_list_columns` holds `(original index, arity)` pairs in ascending
/// order. Columns past the end of `names` are left alone. When `suffixes` is
/// given but its length differs from a column's arity, numeric suffixes are
/// used for that column and a warning is returned.
pub fn expand_names(
    names: &mut Vec<String>,
    sub_list_columns: &[(usize, usize)],
    suffixes: Option<&[String]>,
) -> Vec<IngestWarning> {
    let mut warnings = Vec::new();
    let mut added = 0usize;
    for &(original, arity) in sub_list_columns {
        let position = original + added;
        let Some(base) = names.get(position).cloned() else {
            continue;
        };
        let column_suffixes: Vec<String> = match suffixes {
            Some(given) if given.len() == arity => given.to_vec(),
            Some(given) => {
                warn!(
                    column = %base,
                    suffixes = given.len(),
                    sub_lists = arity,
                    "sub-list suffix count mismatch; using numeric suffixes"
                );
                warnings.push(IngestWarning::SuffixCountMismatch {
                    column_name: base.clone(),
                    suffixes: given.len(),
                    sub_lists: arity,
                });
                numeric_suffixes(arity)
            }
            None => numeric_suffixes(arity),
        };
        let expanded = column_suffixes
            .iter()
            .map(|suffix| format!("{base}_{suffix}"));
        names.splice(position..=position, expanded);
        added += arity.saturating_sub(1);
    }
    warnings
}

fn numeric_suffixes(arity: usize) -> Vec<String> {
    (0..arity).map(|k| format!("{k}")).collect()
}

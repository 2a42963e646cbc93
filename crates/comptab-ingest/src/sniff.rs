//! Column type detection from the first data row.

use comptab_model::ColumnKind;

use crate::options::ReadOptions;

/// Parse a float the way table values are written: surrounding whitespace is
/// ignored.
pub(crate) fn parse_float(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Decide the kind of every column from the fields of the first data row.
///
/// Explicit integer columns win over explicit verbatim columns; everything
/// else is float when the first value parses, a sub-list when sub-lists are
/// recognized and the value contains `{`, and verbatim otherwise. Later rows
/// are never consulted.
pub fn sniff_columns(first_row: &[&str], options: &ReadOptions) -> Vec<ColumnKind> {
    first_row
        .iter()
        .enumerate()
        .map(|(column, value)| {
            if options.int_cols.contains(&column) {
                ColumnKind::Integer
            } else if options.no_convert.contains(&column) {
                ColumnKind::Verbatim
            } else if parse_float(value).is_some() {
                ColumnKind::Float
            } else if options.sub_lists.recognizes_sub_lists() && value.contains('{') {
                ColumnKind::SubList(value.matches(',').count() + 1)
            } else {
                ColumnKind::Verbatim
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SubListMode;

    #[test]
    fn test_sniff_basic_kinds() {
        let options = ReadOptions::default().with_int_cols([0]);
        let kinds = sniff_columns(&["1", "2.5", "NGC5831", "1e-3"], &options);
        assert_eq!(
            kinds,
            vec![
                ColumnKind::Integer,
                ColumnKind::Float,
                ColumnKind::Verbatim,
                ColumnKind::Float
            ]
        );
    }

    #[test]
    fn test_int_cols_beat_no_convert() {
        let options = ReadOptions::default()
            .with_int_cols([0])
            .with_no_convert([0, 1]);
        let kinds = sniff_columns(&["7", "2.5"], &options);
        assert_eq!(kinds, vec![ColumnKind::Integer, ColumnKind::Verbatim]);
    }

    #[test]
    fn test_sub_list_needs_recognition() {
        let row = ["1", "{3,4,5}"];
        let off = sniff_columns(&row, &ReadOptions::default());
        assert_eq!(off[1], ColumnKind::Verbatim);

        let on = ReadOptions::default().with_sub_lists(SubListMode::Convert);
        assert_eq!(sniff_columns(&row, &on)[1], ColumnKind::SubList(3));
    }

    #[test]
    fn test_blank_first_value_is_verbatim() {
        let kinds = sniff_columns(&["", " 4 "], &ReadOptions::default());
        assert_eq!(kinds, vec![ColumnKind::Verbatim, ColumnKind::Float]);
    }
}

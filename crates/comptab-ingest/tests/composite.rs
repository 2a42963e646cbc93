use std::io::Write;

use comptab_ingest::{
    Delimiter, IngestError, IngestWarning, ReadOptions, SubListMode, read_composite_table,
    read_composite_table_from_text,
};
use comptab_model::{Column, ColumnKind};
use ndarray::array;
use tempfile::NamedTempFile;

fn temp_table(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write table");
    file
}

const MIXED: [&str; 2] = ["1 2.5 {3,4,5}", "2 3.5 {6,7,8}"];

#[test]
fn converts_sub_lists_without_expanding() {
    let options = ReadOptions::default()
        .with_int_cols([0])
        .with_sub_lists(SubListMode::Convert);
    let table = read_composite_table_from_text(&MIXED, &options).expect("read table");

    assert_eq!(
        table.kinds,
        vec![ColumnKind::Integer, ColumnKind::Float, ColumnKind::SubList(3)]
    );
    assert_eq!(table.n_cols(), 3);
    assert_eq!(table.columns[0], Column::Int(array![1, 2]));
    assert_eq!(table.columns[1], Column::Float(array![2.5, 3.5]));
    assert_eq!(
        table.columns[2],
        Column::SubList(vec![array![3.0, 6.0], array![4.0, 7.0], array![5.0, 8.0]])
    );
    assert!(table.names.is_none());
}

#[test]
fn expands_sub_lists_and_names() {
    let lines = ["#a b c", MIXED[0], MIXED[1]];
    let options = ReadOptions::default()
        .with_int_cols([0])
        .with_sub_lists(SubListMode::Expand)
        .with_column_row(0);
    let frame = read_composite_table_from_text(&lines, &options)
        .expect("read table")
        .into_frame()
        .expect("build frame");

    assert_eq!(frame.n_cols(), 5);
    assert_eq!(frame.n_rows(), 2);
    assert_eq!(
        frame.names().expect("names"),
        ["a", "b", "c_0", "c_1", "c_2"]
    );
    assert_eq!(frame["c_1"], Column::Float(array![4.0, 7.0]));
    assert_eq!(frame.attr("a"), Some(&Column::Int(array![1, 2])));
}

#[test]
fn sub_lists_stay_text_when_not_recognized() {
    let table =
        read_composite_table_from_text(&MIXED, &ReadOptions::default()).expect("read table");
    assert_eq!(table.kinds[2], ColumnKind::Verbatim);
    assert_eq!(
        table.columns[2],
        Column::Text(vec!["{3,4,5}".to_string(), "{6,7,8}".to_string()])
    );
}

#[test]
fn unclosed_brace_in_text_column_does_not_merge_fields() {
    let lines = ["NGC{1 2.5", "M{31 3.5"];
    let table =
        read_composite_table_from_text(&lines, &ReadOptions::default()).expect("read table");
    assert_eq!(table.n_cols(), 2);
    assert_eq!(table.kinds, vec![ColumnKind::Verbatim, ColumnKind::Float]);
    assert_eq!(
        table.columns[0],
        Column::Text(vec!["NGC{1".to_string(), "M{31".to_string()])
    );
    assert_eq!(table.columns[1], Column::Float(array![2.5, 3.5]));

    let lines = ["a 1.0 2.0", "b{ 3.0 4.0"];
    let table =
        read_composite_table_from_text(&lines, &ReadOptions::default()).expect("read table");
    assert_eq!(table.n_cols(), 3);
    assert_eq!(table.columns[2], Column::Float(array![2.0, 4.0]));
}

#[test]
fn single_blank_in_float_column_uses_blank_value() {
    let lines = ["1,2.0", "2,", "3,4.5"];
    let options = ReadOptions::default()
        .with_delimiter(Delimiter::Char(','))
        .with_blank_value(-1.0);
    let table = read_composite_table_from_text(&lines, &options).expect("read table");
    assert_eq!(table.columns[1], Column::Float(array![2.0, -1.0, 4.5]));
}

#[test]
fn later_non_float_becomes_blank_value() {
    let lines = ["1.0 x", "nope y"];
    let table =
        read_composite_table_from_text(&lines, &ReadOptions::default()).expect("read table");
    assert_eq!(table.columns[0], Column::Float(array![1.0, 0.0]));
    assert_eq!(table.kinds[1], ColumnKind::Verbatim);
}

#[test]
fn later_non_integer_is_fatal() {
    let lines = ["1 2", "2.5 3"];
    let options = ReadOptions::default().with_int_cols([0]);
    let err = read_composite_table_from_text(&lines, &options).expect_err("integer failure");
    assert!(matches!(
        err,
        IngestError::IntegerParse { column: 0, row: 1, .. }
    ));
}

#[test]
fn suffix_mismatch_is_a_warning() {
    let lines = ["# id pos", "1 {1,2,3}"];
    let options = ReadOptions::default()
        .with_sub_lists(SubListMode::Expand)
        .with_column_row(0)
        .with_sub_list_suffixes(["x", "y"]);
    let table = read_composite_table_from_text(&lines, &options).expect("read table");

    assert_eq!(
        table.names.as_deref().expect("names"),
        ["id", "pos_0", "pos_1", "pos_2"]
    );
    assert_eq!(
        table.warnings,
        vec![IngestWarning::SuffixCountMismatch {
            column_name: "pos".to_string(),
            suffixes: 2,
            sub_lists: 3,
        }]
    );
}

#[test]
fn matching_suffixes_are_used() {
    let lines = ["# id pos", "1 {1,2}"];
    let options = ReadOptions::default()
        .with_sub_lists(SubListMode::Expand)
        .with_column_row(0)
        .with_sub_list_suffixes(["x", "y"]);
    let table = read_composite_table_from_text(&lines, &options).expect("read table");
    assert_eq!(
        table.names.as_deref().expect("names"),
        ["id", "pos_x", "pos_y"]
    );
    assert!(table.warnings.is_empty());
}

#[test]
fn header_row_out_of_range_gives_no_names() {
    let options = ReadOptions::default().with_column_row(10);
    let table = read_composite_table_from_text(&["1 2"], &options).expect("read table");
    assert!(table.names.is_none());
}

#[test]
fn no_convert_keeps_numbers_as_text() {
    let options = ReadOptions::default().with_no_convert([1]);
    let table = read_composite_table_from_text(&["1 2", "3 4"], &options).expect("read table");
    assert_eq!(
        table.columns[1],
        Column::Text(vec!["2".to_string(), "4".to_string()])
    );
}

#[test]
fn reads_file_with_comments_and_header() {
    let file = temp_table(
        "# sma intens name\n\
         # produced by ellipse fitting\n\
         \n\
         1.5 100.0 inner\n\
         2.5 80.0 outer\n",
    );
    let options = ReadOptions::default().with_column_row(0);
    let frame = read_composite_table(file.path(), &options)
        .expect("read table")
        .into_frame()
        .expect("build frame");

    assert_eq!(frame.names().expect("names"), ["sma", "intens", "name"]);
    assert_eq!(frame["sma"], Column::Float(array![1.5, 2.5]));
    assert_eq!(
        frame.get("name").expect("name column"),
        &Column::Text(vec!["inner".to_string(), "outer".to_string()])
    );
}

#[test]
fn reads_file_with_cr_line_endings() {
    let file = temp_table("# r flux\r0.5 10.0\r1.5 20.0\r");
    let options = ReadOptions::default().with_column_row(0);
    let table = read_composite_table(file.path(), &options).expect("read table");

    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.n_cols(), 2);
    assert_eq!(table.columns[1], Column::Float(array![10.0, 20.0]));
    assert_eq!(
        table.names.as_deref(),
        Some(&["r".to_string(), "flux".to_string()][..])
    );
}

#[test]
fn missing_file_is_reported() {
    let err = read_composite_table(
        std::path::Path::new("/no/such/table.dat"),
        &ReadOptions::default(),
    )
    .expect_err("missing file");
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

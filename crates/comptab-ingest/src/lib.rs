//! Reader for loosely structured, whitespace- or character-delimited text
//! tables.
//!
//! Column kinds are decided from the first data row: integer columns are
//! requested explicitly, anything that parses as a float is a float column,
//! brace groups such as `{1,2,3}` can be recognized as sub-lists, and the
//! rest is kept verbatim. Sub-list columns can optionally be expanded into
//! one float column per position.
//!
//! ```
//! use comptab_ingest::{ReadOptions, SubListMode, read_composite_table_from_text};
//!
//! let options = ReadOptions::default()
//!     .with_int_cols([0])
//!     .with_sub_lists(SubListMode::Expand)
//!     .with_column_row(0);
//! let table = read_composite_table_from_text(
//!     &["# a b c", "1 2.5 {3,4,5}", "2 3.5 {6,7,8}"],
//!     &options,
//! )
//! .unwrap();
//!
//! let frame = table.into_frame().unwrap();
//! assert_eq!(frame.n_cols(), 5);
//! assert_eq!(frame.names().unwrap(), ["a", "b", "c_0", "c_1", "c_2"]);
//! ```

pub mod classify;
pub mod error;
pub mod expand;
pub mod materialize;
pub mod options;
pub mod reader;
pub mod sniff;
pub mod source;
pub mod tokenize;

// === Error Types ===
pub use error::{IngestError, IngestWarning, Result};

// === Options ===
pub use options::{Delimiter, ReadOptions, SubListMode};

// === Readers ===
pub use reader::{
    CompositeTable, read_composite_table, read_composite_table_from_text, read_table_array,
    read_table_array_from_text, read_table_frame,
};
pub use source::{FileSource, LineSource, SourceLines, TextSource, count_data_lines, count_lines};

// === Column Helpers ===
pub use expand::{expand_names, expand_sub_lists, insert_and_replace};
pub use materialize::{column_to_floats, column_to_ints, extract_sub_lists, materialize_column};
pub use sniff::sniff_columns;

//! Error and warning types for table ingestion.

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

use comptab_model::FrameError;
use thiserror::Error;

/// Errors that can occur while reading a table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Table file not found.
    #[error("table file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Table Shape Errors ===
    /// Every line was blank or a comment.
    #[error("no data lines in {source_name}")]
    NoDataLines { source_name: String },

    /// A data row has fewer fields than the first data row.
    #[error("data row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    // === Numeric Parse Errors ===
    /// A value in an integer column is not an integer.
    #[error("column {column}, data row {row}: '{value}' is not an integer")]
    IntegerParse {
        column: usize,
        row: usize,
        value: String,
    },

    /// A value in an all-float table is not a number.
    #[error("column {column}, data row {row}: '{value}' is not a number")]
    FloatParse {
        column: usize,
        row: usize,
        value: String,
    },

    /// A sub-list element is not a number.
    #[error("column {column}, data row {row}: sub-list element '{value}' is not a number")]
    SubListParse {
        column: usize,
        row: usize,
        value: String,
    },

    /// A sub-list has fewer elements than the first data row's sub-list.
    #[error("column {column}, data row {row}: sub-list has {found} elements, expected {expected}")]
    SubListArity {
        column: usize,
        row: usize,
        expected: usize,
        found: usize,
    },

    // === Column Layout Errors ===
    /// Replacement position is outside the list.
    #[error("insert location {index} is outside a list of length {len}")]
    InsertOutOfRange { index: usize, len: usize },

    /// Building the frame failed.
    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Non-fatal problems found while reading; processing continued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestWarning {
    /// The caller's sub-list suffixes did not match the sub-list arity, so
    /// numeric suffixes were used instead.
    SuffixCountMismatch {
        column_name: String,
        suffixes: usize,
        sub_lists: usize,
    },
}

impl Display for IngestWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            IngestWarning::SuffixCountMismatch {
                column_name,
                suffixes,
                sub_lists,
            } => write!(
                f,
                "number of sub-list suffixes ({suffixes}) != number of sub-lists ({sub_lists}) \
                 for column '{column_name}'; numeric suffixes used instead"
            ),
        }
    }
}

//! Error types for DataFrame construction and column naming.

use thiserror::Error;

/// Errors raised by [`ListDataFrame`](crate::ListDataFrame) and
/// [`ArrayDataFrame`](crate::ArrayDataFrame).
#[derive(Debug, Error)]
pub enum FrameError {
    // === Input Shape Errors ===
    /// A list-backed frame was built from zero columns.
    #[error("a ListDataFrame needs at least one column")]
    EmptyFrame,

    /// An array-backed frame was built from an array that is not 2-D.
    #[error("an ArrayDataFrame needs a 2-D array, got {ndim} dimension(s)")]
    NotTwoDimensional { ndim: usize },

    /// A new column does not have as many rows as the existing columns.
    #[error("new column has {actual} rows but existing columns have {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    // === Naming Errors ===
    /// The requested column name is not bound.
    #[error("column name \"{name}\" does not exist")]
    NameNotFound { name: String },

    /// The new column name is already bound.
    #[error("{name} is already a column name in this frame")]
    DuplicateName { name: String },
}

/// Result type for frame operations.
pub type Result<T> = std::result::Result<T, FrameError>;

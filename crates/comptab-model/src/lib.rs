//! Column types and DataFrame wrappers for composite text tables.
//!
//! Two frame variants are provided:
//!
//! - [`ListDataFrame`]: a list of independently typed columns (integers,
//!   floats, sub-lists, raw strings)
//! - [`ArrayDataFrame`]: one 2-D `f64` matrix
//!
//! Both address columns by position, by name, and by attribute-style alias,
//! with all three views sharing the same storage.
//!
//! # Example
//!
//! ```
//! use comptab_model::{Column, ListDataFrame};
//!
//! let mut frame = ListDataFrame::new(
//!     vec![Column::from(vec![1_i64, 2]), Column::from(vec![2.5, 3.5])],
//!     Some(vec!["id".to_string(), "radius".to_string()]),
//! )
//! .unwrap();
//!
//! frame.change_column_name("radius", "sma").unwrap();
//! assert!(std::ptr::eq(&frame[1], &frame["sma"]));
//! assert!(frame.get("radius").is_err());
//! ```

mod array_frame;
mod column;
mod error;
mod index;
mod list_frame;

#[cfg(feature = "polars")]
mod polars_ext;

// === Error Types ===
pub use error::{FrameError, Result};

// === Columns ===
pub use column::{Column, ColumnKind};
pub use index::{ColumnIndex, attribute_name};

// === Frames ===
pub use array_frame::ArrayDataFrame;
pub use list_frame::ListDataFrame;

//! Heterogeneous list-of-columns frame.

use std::fmt::{self, Display, Formatter};
use std::ops::{Index, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::column::Column;
use crate::error::{FrameError, Result};
use crate::index::ColumnIndex;

/// A table held as a list of columns, each with its own type.
///
/// Columns are addressed positionally (`frame[0]`, `frame[1..3]`), by name
/// (`frame["radius"]`, [`get`](Self::get)), or through the attribute view
/// ([`attr`](Self::attr)). Every name lookup returns a reference into the same
/// column storage; no lookup copies data.
#[derive(Debug, Clone)]
pub struct ListDataFrame {
    columns: Vec<Column>,
    index: ColumnIndex,
}

impl ListDataFrame {
    /// Build a frame from materialized columns, optionally naming them.
    pub fn new(columns: Vec<Column>, names: Option<Vec<String>>) -> Result<Self> {
        if columns.is_empty() {
            return Err(FrameError::EmptyFrame);
        }
        let mut frame = Self {
            columns,
            index: ColumnIndex::default(),
        };
        if let Some(names) = names {
            frame.set_columns(names);
        }
        Ok(frame)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Row count of the first column.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn as_slice(&self) -> &[Column] {
        &self.columns
    }

    pub fn names(&self) -> Option<&[String]> {
        self.index.names()
    }

    pub fn column_index(&self) -> &ColumnIndex {
        &self.index
    }

    pub fn column(&self, position: usize) -> Option<&Column> {
        self.columns.get(position)
    }

    pub fn get(&self, name: &str) -> Result<&Column> {
        self.index
            .lookup(name)
            .map(|position| &self.columns[position])
            .ok_or_else(|| FrameError::NameNotFound {
                name: name.to_string(),
            })
    }

    /// Attribute-style lookup (`frame.attr("radius")`).
    pub fn attr(&self, attr: &str) -> Option<&Column> {
        self.index
            .lookup_attr(attr)
            .map(|position| &self.columns[position])
    }

    /// Define the column names, erasing any earlier name definitions.
    pub fn set_columns<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect();
        self.index.set(names, self.columns.len());
    }

    /// Define an additional set of names without erasing existing ones.
    pub fn set_alt_columns<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        self.index.set_alt(&names, self.columns.len());
    }

    /// Make the column bound to `old` reachable as `new` as well.
    pub fn add_column_name(&mut self, old: &str, new: impl Into<String>) -> Result<()> {
        self.index.alias(old, new.into())
    }

    /// Replace `old` with `new` in the visible name list and rebind all names.
    ///
    /// Alternate names added with [`set_alt_columns`](Self::set_alt_columns)
    /// or [`add_column_name`](Self::add_column_name) are dropped by the rebind.
    pub fn change_column_name(&mut self, old: &str, new: impl Into<String>) -> Result<()> {
        self.index.rename(old, new.into(), self.columns.len())
    }

    /// Append a column, naming it when the frame already has names.
    pub fn add_new_column(
        &mut self,
        column: impl Into<Column>,
        name: Option<String>,
    ) -> Result<()> {
        let column = column.into();
        let expected = self.n_rows();
        if column.len() != expected {
            return Err(FrameError::LengthMismatch {
                expected,
                actual: column.len(),
            });
        }
        self.columns.push(column);
        if let Some(name) = name {
            if !self.index.push(name, self.columns.len()) {
                tracing::debug!("frame has no column names; new column left unnamed");
            }
        }
        Ok(())
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }
}

impl Index<usize> for ListDataFrame {
    type Output = Column;

    fn index(&self, position: usize) -> &Column {
        &self.columns[position]
    }
}

impl Index<&str> for ListDataFrame {
    type Output = Column;

    fn index(&self, name: &str) -> &Column {
        match self.get(name) {
            Ok(column) => column,
            Err(err) => panic!("{err}"),
        }
    }
}

macro_rules! impl_range_index {
    ($($range:ty),* $(,)?) => {
        $(
            impl Index<$range> for ListDataFrame {
                type Output = [Column];

                fn index(&self, range: $range) -> &[Column] {
                    &self.columns[range]
                }
            }
        )*
    };
}

impl_range_index!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeInclusive<usize>,
    RangeToInclusive<usize>,
    RangeFull,
);

impl Display for ListDataFrame {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(names) = self.names() {
            writeln!(f, "{names:?}")?;
        }
        write!(f, "[")?;
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{column}")?;
        }
        write!(f, "]")
    }
}

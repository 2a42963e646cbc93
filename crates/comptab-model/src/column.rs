//! Materialized table columns.

use std::fmt::{self, Display, Formatter};

use ndarray::Array1;

/// The type tag of a column, decided once from the first data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Integer,
    Float,
    /// Brace-delimited tuples of the given arity, e.g. `{1,2,3}`.
    SubList(usize),
    /// Left as raw strings.
    Verbatim,
}

impl Display for ColumnKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Integer => write!(f, "integer"),
            ColumnKind::Float => write!(f, "float"),
            ColumnKind::SubList(n) => write!(f, "sub-list[{n}]"),
            ColumnKind::Verbatim => write!(f, "verbatim"),
        }
    }
}

/// One converted table column.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Int(Array1<i64>),
    Float(Array1<f64>),
    /// One array per sub-list position, each holding one value per row.
    SubList(Vec<Array1<f64>>),
    Text(Vec<String>),
}

impl Column {
    /// Number of rows in the column.
    ///
    /// For a sub-list column this is the length of its per-position arrays,
    /// not the number of positions.
    pub fn len(&self) -> usize {
        match self {
            Column::Int(values) => values.len(),
            Column::Float(values) => values.len(),
            Column::SubList(parts) => parts.first().map_or(0, Array1::len),
            Column::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Int(_) => ColumnKind::Integer,
            Column::Float(_) => ColumnKind::Float,
            Column::SubList(parts) => ColumnKind::SubList(parts.len()),
            Column::Text(_) => ColumnKind::Verbatim,
        }
    }

    pub fn as_int(&self) -> Option<&Array1<i64>> {
        match self {
            Column::Int(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<&Array1<f64>> {
        match self {
            Column::Float(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_sub_lists(&self) -> Option<&[Array1<f64>]> {
        match self {
            Column::SubList(parts) => Some(parts),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&[String]> {
        match self {
            Column::Text(values) => Some(values),
            _ => None,
        }
    }
}

impl From<Array1<i64>> for Column {
    fn from(values: Array1<i64>) -> Self {
        Column::Int(values)
    }
}

impl From<Array1<f64>> for Column {
    fn from(values: Array1<f64>) -> Self {
        Column::Float(values)
    }
}

impl From<Vec<i64>> for Column {
    fn from(values: Vec<i64>) -> Self {
        Column::Int(Array1::from(values))
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Float(Array1::from(values))
    }
}

impl From<Vec<Array1<f64>>> for Column {
    fn from(parts: Vec<Array1<f64>>) -> Self {
        Column::SubList(parts)
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Column::Text(values)
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Column::Int(values) => write!(f, "{values}"),
            Column::Float(values) => write!(f, "{values}"),
            Column::SubList(parts) => {
                write!(f, "[")?;
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{part}")?;
                }
                write!(f, "]")
            }
            Column::Text(values) => write!(f, "{values:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn sub_list_len_counts_rows() {
        let column = Column::SubList(vec![array![3.0, 6.0], array![4.0, 7.0], array![5.0, 8.0]]);
        assert_eq!(column.len(), 2);
        assert_eq!(column.kind(), ColumnKind::SubList(3));
    }

    #[test]
    fn accessors_match_variant() {
        let column = Column::from(vec![1_i64, 2]);
        assert_eq!(column.as_int(), Some(&array![1, 2]));
        assert!(column.as_float().is_none());
        assert!(column.as_text().is_none());
    }

    #[test]
    fn kind_display() {
        assert_eq!(ColumnKind::SubList(3).to_string(), "sub-list[3]");
        assert_eq!(ColumnKind::Verbatim.to_string(), "verbatim");
    }
}

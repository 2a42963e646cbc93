//! Homogeneous 2-D floating-point frame.

use std::fmt::{self, Display, Formatter};
use std::ops::Index;

use ndarray::{Array2, ArrayD, ArrayView1, ArrayView2, Ix2};

use crate::error::{FrameError, Result};
use crate::index::ColumnIndex;

/// A table held as one row-major `f64` matrix: `data()[[i, j]]` is row `i`,
/// column `j`.
///
/// Named lookups return views of the matrix columns. Everything else goes
/// through [`data`](Self::data), so `ndarray` slicing applies unchanged, e.g.
/// `frame.data().slice(s![.., 1..3])`.
#[derive(Debug, Clone)]
pub struct ArrayDataFrame {
    data: Array2<f64>,
    index: ColumnIndex,
}

impl ArrayDataFrame {
    pub fn new(data: Array2<f64>, names: Option<Vec<String>>) -> Self {
        let mut frame = Self {
            data,
            index: ColumnIndex::default(),
        };
        if let Some(names) = names {
            frame.set_columns(names);
        }
        frame
    }

    /// Build a frame from an array of unknown dimensionality.
    pub fn from_dyn(data: ArrayD<f64>, names: Option<Vec<String>>) -> Result<Self> {
        let ndim = data.ndim();
        let data = data
            .into_dimensionality::<Ix2>()
            .map_err(|_| FrameError::NotTwoDimensional { ndim })?;
        Ok(Self::new(data, names))
    }

    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn names(&self) -> Option<&[String]> {
        self.index.names()
    }

    pub fn column_index(&self) -> &ColumnIndex {
        &self.index
    }

    pub fn column(&self, position: usize) -> Option<ArrayView1<'_, f64>> {
        (position < self.data.ncols()).then(|| self.data.column(position))
    }

    pub fn row(&self, position: usize) -> Option<ArrayView1<'_, f64>> {
        (position < self.data.nrows()).then(|| self.data.row(position))
    }

    pub fn get(&self, name: &str) -> Result<ArrayView1<'_, f64>> {
        self.index
            .lookup(name)
            .map(|position| self.data.column(position))
            .ok_or_else(|| FrameError::NameNotFound {
                name: name.to_string(),
            })
    }

    pub fn attr(&self, attr: &str) -> Option<ArrayView1<'_, f64>> {
        self.index
            .lookup_attr(attr)
            .map(|position| self.data.column(position))
    }

    /// Define the column names, erasing any earlier name definitions.
    pub fn set_columns<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect();
        self.index.set(names, self.data.ncols());
    }

    /// Define an additional set of names without erasing existing ones.
    pub fn set_alt_columns<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        self.index.set_alt(&names, self.data.ncols());
    }

    pub fn add_column_name(&mut self, old: &str, new: impl Into<String>) -> Result<()> {
        self.index.alias(old, new.into())
    }

    /// Replace `old` with `new` in the visible name list and rebind all names.
    pub fn change_column_name(&mut self, old: &str, new: impl Into<String>) -> Result<()> {
        self.index.rename(old, new.into(), self.data.ncols())
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.data
    }
}

impl Index<[usize; 2]> for ArrayDataFrame {
    type Output = f64;

    fn index(&self, index: [usize; 2]) -> &f64 {
        &self.data[index]
    }
}

impl Display for ArrayDataFrame {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(names) = self.names() {
            writeln!(f, "{names:?}")?;
        }
        write!(f, "{}", self.data)
    }
}

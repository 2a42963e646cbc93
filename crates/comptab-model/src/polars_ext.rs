//! Conversion of frames into Polars DataFrames.

use polars::prelude::{Column as PlColumn, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

use crate::{ArrayDataFrame, Column, ListDataFrame};

fn column_name(names: Option<&[String]>, position: usize) -> String {
    names
        .and_then(|names| names.get(position))
        .cloned()
        .unwrap_or_else(|| format!("column_{position}"))
}

impl ListDataFrame {
    /// Convert to a Polars DataFrame.
    ///
    /// Unnamed columns become `column_<i>`; a sub-list column named `c`
    /// becomes one `Float64` column per position, `c_0` .. `c_<n-1>`.
    pub fn to_polars(&self) -> PolarsResult<DataFrame> {
        let mut columns: Vec<PlColumn> = Vec::with_capacity(self.n_cols());
        for (position, column) in self.as_slice().iter().enumerate() {
            let name = column_name(self.names(), position);
            match column {
                Column::Int(values) => {
                    columns.push(Series::new(name.into(), values.to_vec()).into_column());
                }
                Column::Float(values) => {
                    columns.push(Series::new(name.into(), values.to_vec()).into_column());
                }
                Column::SubList(parts) => {
                    for (k, part) in parts.iter().enumerate() {
                        let part_name = format!("{name}_{k}");
                        columns.push(Series::new(part_name.into(), part.to_vec()).into_column());
                    }
                }
                Column::Text(values) => {
                    columns.push(Series::new(name.into(), values.clone()).into_column());
                }
            }
        }
        DataFrame::new(columns)
    }
}

impl ArrayDataFrame {
    /// Convert to a Polars DataFrame with one `Float64` column per matrix column.
    pub fn to_polars(&self) -> PolarsResult<DataFrame> {
        let columns = self
            .data()
            .columns()
            .into_iter()
            .enumerate()
            .map(|(position, values)| {
                let name = column_name(self.names(), position);
                Series::new(name.into(), values.to_vec()).into_column()
            })
            .collect();
        DataFrame::new(columns)
    }
}

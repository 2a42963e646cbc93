use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use comptab_ingest::CompositeTable;
use comptab_model::ArrayDataFrame;
use serde::Serialize;

/// Column-level summary of a composite table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    pub source: String,
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub position: usize,
    pub name: Option<String>,
    pub kind: String,
    pub rows: usize,
}

impl TableSummary {
    pub fn from_table(source: impl Into<String>, table: &CompositeTable) -> Self {
        let names = table.names.as_deref().unwrap_or_default();
        let columns = table
            .columns
            .iter()
            .enumerate()
            .map(|(position, column)| ColumnSummary {
                position,
                name: names.get(position).cloned(),
                kind: column.kind().to_string(),
                rows: column.len(),
            })
            .collect();
        Self {
            source: source.into(),
            rows: table.n_rows(),
            columns,
            warnings: table.warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Line counts for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    pub total: usize,
    pub data: usize,
}

/// Shape and per-column range of an all-float table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArraySummary {
    pub source: String,
    pub rows: usize,
    pub columns: Vec<RangeSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSummary {
    pub position: usize,
    pub name: Option<String>,
    pub min: f64,
    pub max: f64,
}

impl ArraySummary {
    pub fn from_frame(source: impl Into<String>, frame: &ArrayDataFrame) -> Self {
        let names = frame.names().unwrap_or_default();
        let columns = (0..frame.n_cols())
            .filter_map(|position| {
                let values = frame.column(position)?;
                let min = values.fold(f64::INFINITY, |acc, &value| acc.min(value));
                let max = values.fold(f64::NEG_INFINITY, |acc, &value| acc.max(value));
                Some(RangeSummary {
                    position,
                    name: names.get(position).cloned(),
                    min,
                    max,
                })
            })
            .collect();
        Self {
            source: source.into(),
            rows: frame.n_rows(),
            columns,
        }
    }
}

pub fn print_table_summary(summary: &TableSummary) {
    println!("Table: {}", summary.source);
    println!("Rows: {}", summary.rows);
    println!("{}", table_summary_table(summary));
    if !summary.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &summary.warnings {
            eprintln!("- {warning}");
        }
    }
}

pub fn table_summary_table(summary: &TableSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Name"),
        header_cell("Kind"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for column in &summary.columns {
        table.add_row(vec![
            Cell::new(column.position),
            name_cell(column.name.as_deref()),
            Cell::new(&column.kind),
            Cell::new(column.rows),
        ]);
    }
    table
}

pub fn print_line_counts(counts: LineCounts) {
    println!("Lines: {}", counts.total);
    println!("Data lines: {}", counts.data);
}

pub fn print_array_summary(summary: &ArraySummary) {
    println!("Table: {}", summary.source);
    println!("Shape: {} x {}", summary.rows, summary.columns.len());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Name"),
        header_cell("Min"),
        header_cell("Max"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for column in &summary.columns {
        table.add_row(vec![
            Cell::new(column.position),
            name_cell(column.name.as_deref()),
            Cell::new(column.min),
            Cell::new(column.max),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn name_cell(name: Option<&str>) -> Cell {
    match name {
        Some(name) => Cell::new(name),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

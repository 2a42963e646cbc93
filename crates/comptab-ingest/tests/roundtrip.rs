use comptab_ingest::{ReadOptions, read_composite_table_from_text};
use comptab_model::Column;
use proptest::prelude::*;

fn render(rows: &[Vec<f64>]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

fn table_values() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..6, 1usize..20).prop_flat_map(|(n_cols, n_rows)| {
        prop::collection::vec(
            prop::collection::vec(-1.0e9f64..1.0e9, n_cols),
            n_rows,
        )
    })
}

proptest! {
    #[test]
    fn well_formed_numeric_table_round_trips(rows in table_values()) {
        let mut lines = vec!["# generated".to_string()];
        lines.extend(render(&rows));

        let table = read_composite_table_from_text(&lines, &ReadOptions::default())
            .expect("read table");

        prop_assert_eq!(table.n_cols(), rows[0].len());
        prop_assert_eq!(table.n_rows(), rows.len());
        for (column_index, column) in table.columns.iter().enumerate() {
            let Column::Float(values) = column else {
                panic!("column {column_index} is not a float column");
            };
            for (row_index, row) in rows.iter().enumerate() {
                prop_assert_eq!(values[row_index], row[column_index]);
            }
        }
    }
}

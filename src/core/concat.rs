// concat.rs - Row-wise concatenation of tagged tables

use crate::data::{Cell, SourceTable};
use std::collections::HashMap;

/// Every input row stacked under the union of all input columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl CombinedTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Stack tables in order. Columns keep first-seen order and cells a source
/// table does not have are left missing. An empty input is an error.
pub fn concat_tables(tables: &[SourceTable]) -> Result<CombinedTable, String> {
    if tables.is_empty() {
        return Err("No tables to concatenate".to_string());
    }

    let mut columns: Vec<String> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for table in tables {
        for name in &table.columns {
            if !positions.contains_key(name) {
                positions.insert(name.clone(), columns.len());
                columns.push(name.clone());
            }
        }
    }

    let total_rows: usize = tables.iter().map(|t| t.row_count()).sum();
    let mut rows = Vec::with_capacity(total_rows);

    for table in tables {
        let mapping: Vec<usize> = table.columns.iter().map(|c| positions[c]).collect();
        for source_row in &table.rows {
            let mut row: Vec<Cell> = vec![None; columns.len()];
            for (cell, &target) in source_row.iter().zip(&mapping) {
                row[target] = cell.clone();
            }
            rows.push(row);
        }
    }

    Ok(CombinedTable { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn table(name: &str, columns: &[&str], rows: &[&[&str]], run_id: &str) -> SourceTable {
        let mut t = SourceTable::new(
            Path::new(name),
            columns.iter().map(|c| c.to_string()).collect(),
        );
        for row in rows {
            t.rows.push(row.iter().map(|v| Some(v.to_string())).collect());
        }
        t.set_run_id("RunID", run_id);
        t
    }

    fn cells(values: &[Option<&str>]) -> Vec<Cell> {
        values.iter().map(|v| v.map(String::from)).collect()
    }

    #[test]
    fn test_column_union_first_seen_order() {
        let a = table("a.csv", &["x", "y"], &[&["1", "2"]], "run1");
        let b = table("b.csv", &["x", "z"], &[&["3", "4"]], "run2");

        let combined = concat_tables(&[a, b]).unwrap();
        assert_eq!(combined.columns, vec!["x", "y", "RunID", "z"]);
        assert_eq!(combined.rows[0], cells(&[Some("1"), Some("2"), Some("run1"), None]));
        assert_eq!(combined.rows[1], cells(&[Some("3"), None, Some("run2"), Some("4")]));
    }

    #[test]
    fn test_row_count_is_sum_and_order_kept() {
        let a = table("a.csv", &["v"], &[&["a1"], &["a2"], &["a3"]], "A");
        let b = table("b.csv", &["v"], &[], "B");
        let c = table("c.csv", &["v"], &[&["c1"], &["c2"]], "C");

        let combined = concat_tables(&[a, b, c]).unwrap();
        assert_eq!(combined.row_count(), 5);
        let values: Vec<&str> = combined
            .rows
            .iter()
            .map(|r| r[0].as_deref().unwrap())
            .collect();
        assert_eq!(values, vec!["a1", "a2", "a3", "c1", "c2"]);
        assert!(combined.rows[..3].iter().all(|r| r[1].as_deref() == Some("A")));
        assert!(combined.rows[3..].iter().all(|r| r[1].as_deref() == Some("C")));
    }

    #[test]
    fn test_header_only_table_contributes_columns() {
        let a = table("a.csv", &["x"], &[&["1"]], "A");
        let b = table("b.csv", &["w"], &[], "B");

        let combined = concat_tables(&[a, b]).unwrap();
        assert_eq!(combined.columns, vec!["x", "RunID", "w"]);
        assert_eq!(combined.rows[0][2], None);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(concat_tables(&[]).is_err());
    }
}

// csv.rs - Delimited file loader for exported tables

use crate::data::table::{dedup_column_names, Cell, SourceTable};
use csv::ReaderBuilder;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Empty fields are missing values
fn parse_cell(field: &str) -> Cell {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

impl SourceTable {
    /// Load a delimited file with a header row
    pub fn from_csv(file_path: &Path, delimiter: u8) -> Result<Self, String> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_path(file_path)
            .map_err(|e| format!("Failed to open '{}': {}", file_path.display(), e))?;

        let header = reader
            .headers()
            .map_err(|e| format!("Failed to read header of '{}': {}", file_path.display(), e))?
            .clone();

        if header.is_empty() {
            return Err(format!(
                "No columns to parse from '{}' (empty file)",
                file_path.display()
            ));
        }

        let raw_columns: Vec<String> = header
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i == 0 {
                    name.trim_start_matches(UTF8_BOM).to_string()
                } else {
                    name.to_string()
                }
            })
            .collect();
        let columns = dedup_column_names(raw_columns);
        let width = columns.len();
        let mut table = SourceTable::new(file_path, columns);

        for (line_num, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                format!(
                    "Failed to parse '{}' at line {}: {}",
                    file_path.display(),
                    line_num + 2,
                    e
                )
            })?;

            if record.len() > width {
                return Err(format!(
                    "'{}' line {} has {} fields, expected at most {}",
                    file_path.display(),
                    line_num + 2,
                    record.len(),
                    width
                ));
            }

            let mut row: Vec<Cell> = record.iter().map(parse_cell).collect();
            row.resize(width, None);
            table.rows.push(row);
        }

        println!(
            "✅ Loaded {}: {} rows, {} columns",
            table.display_name(),
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }
}

// table.rs - Source table data structure

use std::path::{Path, PathBuf};

/// Default name of the column that carries the run identifier
pub const DEFAULT_RUN_ID_COLUMN: &str = "RunID";

/// A single cell; `None` marks a missing value
pub type Cell = Option<String>;

/// One exported file loaded into memory
#[derive(Debug, Clone)]
pub struct SourceTable {
    pub file_path: PathBuf,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl SourceTable {
    /// Create an empty table for the given file and header
    pub fn new(file_path: &Path, columns: Vec<String>) -> Self {
        Self {
            file_path: file_path.to_path_buf(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Value of a named column in a given row (`None` if missing or unknown)
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    /// Set `column` to `run_id` on every row.
    ///
    /// An existing column of that name is overwritten in place; otherwise the
    /// column is appended after the file's own columns.
    pub fn set_run_id(&mut self, column: &str, run_id: &str) {
        match self.column_index(column) {
            Some(idx) => {
                for row in &mut self.rows {
                    row[idx] = Some(run_id.to_string());
                }
            }
            None => {
                self.columns.push(column.to_string());
                for row in &mut self.rows {
                    row.push(Some(run_id.to_string()));
                }
            }
        }
    }

    /// File name for display, falling back to the full path
    pub fn display_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file_path.display().to_string())
    }
}

/// Make header names unique: repeated names become `name.1`, `name.2`, ...
pub fn dedup_column_names(raw: Vec<String>) -> Vec<String> {
    let mut columns: Vec<String> = Vec::with_capacity(raw.len());
    for name in raw {
        if !columns.contains(&name) {
            columns.push(name);
            continue;
        }
        let mut n = 1;
        let mut candidate = format!("{}.{}", name, n);
        while columns.contains(&candidate) {
            n += 1;
            candidate = format!("{}.{}", name, n);
        }
        columns.push(candidate);
    }
    columns
}

// mod.rs - Combined table export

use crate::core::CombinedTable;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::{create_dir_all, File};
use std::io::BufWriter;
use std::path::Path;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<(), String> {
    if let Some(parent) = file_path.parent() {
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    Ok(())
}

/// Write the combined table: one header row, no index column, missing cells
/// as `na_rep`. An existing file is overwritten.
pub fn write_combined(
    file_path: &Path,
    table: &CombinedTable,
    delimiter: u8,
    na_rep: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path.display(), e))?;

    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(BufWriter::new(file));

    writer
        .write_record(&table.columns)
        .map_err(|e| format!("Write error: {}", e))?;

    for row in &table.rows {
        let record = row.iter().map(|cell| cell.as_deref().unwrap_or(na_rep));
        writer
            .write_record(record)
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Combined table written to: {}", file_path.display());
    Ok(())
}

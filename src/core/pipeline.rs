// pipeline.rs - Discover, tag, concatenate and export

use crate::core::concat::{concat_tables, CombinedTable};
use crate::data::{
    discover_files, eligible_files, is_eligible, SourceTable, DEFAULT_RUN_ID_COLUMN,
};
use crate::output::write_combined;
use crate::runid::RunIdSource;
use std::path::{Path, PathBuf};

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "GlobalResults.csv";
/// Default field delimiter for input and output
pub const DEFAULT_DELIMITER: u8 = b';';
/// Default placeholder written for missing cells
pub const DEFAULT_NA_REP: &str = ".";

/// Table format settings shared by loading and export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub delimiter: u8,
    pub na_rep: String,
    pub run_id_column: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            na_rep: DEFAULT_NA_REP.to_string(),
            run_id_column: DEFAULT_RUN_ID_COLUMN.to_string(),
        }
    }
}

/// What a completed merge produced
#[derive(Debug, Clone)]
pub struct MergeSummary {
    pub output_path: PathBuf,
    pub files: Vec<PathBuf>,
    pub rows: usize,
    pub columns: usize,
}

/// Resolve the output path: relative paths live in the target directory
pub fn resolve_output(dir: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        output.to_path_buf()
    } else {
        dir.join(output)
    }
}

/// Load every eligible file and tag its rows with the identifier from `source`.
///
/// Ineligible paths are skipped silently. The identifier is requested before
/// the file is read; any failure aborts the whole run.
pub fn tag_files(
    paths: &[PathBuf],
    source: &mut dyn RunIdSource,
    options: &MergeOptions,
) -> Result<Vec<SourceTable>, String> {
    let mut tables = Vec::new();

    for path in paths {
        if !is_eligible(path) {
            continue;
        }

        let run_id = source.run_id_for(path)?;
        let mut table = SourceTable::from_csv(path, options.delimiter)?;
        table.set_run_id(&options.run_id_column, &run_id);
        tables.push(table);
    }

    Ok(tables)
}

/// Inputs the merge would read from `dir`, in processing order
pub fn find_inputs(dir: &Path, output_path: &Path) -> Result<Vec<PathBuf>, String> {
    println!("📂 Scanning directory: {}", dir.display());
    let discovered = discover_files(dir)?;
    let inputs = eligible_files(&discovered, Some(output_path));

    let candidates = discovered.iter().filter(|p| is_eligible(p)).count();
    if candidates > inputs.len() {
        println!(
            "⚠️  Skipping previous output file: {}",
            output_path.display()
        );
    }

    println!(
        "📊 Found {} files, {} eligible .csv inputs",
        discovered.len(),
        inputs.len()
    );
    Ok(inputs)
}

/// Stack the tagged tables, refusing to produce an output from nothing
pub fn combine(tables: &[SourceTable], dir: &Path) -> Result<CombinedTable, String> {
    if tables.is_empty() {
        return Err(format!(
            "No eligible .csv files found in '{}'",
            dir.display()
        ));
    }
    concat_tables(tables)
}

/// Run the whole merge: scan `dir`, tag every input, write one output file.
///
/// Nothing is written unless every input was tagged and loaded.
pub fn run_merge(
    dir: &Path,
    output: &Path,
    source: &mut dyn RunIdSource,
    options: &MergeOptions,
) -> Result<MergeSummary, String> {
    let output_path = resolve_output(dir, output);
    let inputs = find_inputs(dir, &output_path)?;

    let tables = tag_files(&inputs, source, options)?;
    let combined = combine(&tables, dir)?;

    write_combined(&output_path, &combined, options.delimiter, &options.na_rep)?;

    Ok(MergeSummary {
        output_path,
        files: inputs,
        rows: combined.row_count(),
        columns: combined.column_count(),
    })
}

/// Load every input without tagging or writing, for `--dry-run`
pub fn dry_run(
    dir: &Path,
    output: &Path,
    options: &MergeOptions,
) -> Result<Vec<SourceTable>, String> {
    let output_path = resolve_output(dir, output);
    let inputs = find_inputs(dir, &output_path)?;
    if inputs.is_empty() {
        return Err(format!(
            "No eligible .csv files found in '{}'",
            dir.display()
        ));
    }

    inputs
        .iter()
        .map(|path| SourceTable::from_csv(path, options.delimiter))
        .collect()
}

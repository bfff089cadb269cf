// discovery.rs - Input file discovery and eligibility

use std::fs;
use std::path::{Path, PathBuf};

/// Literal suffix an input path must end with
pub const CSV_SUFFIX: &str = ".csv";

/// List the regular files directly inside `dir` as absolute paths.
///
/// Subdirectories are skipped and nothing is filtered by extension. The
/// result is sorted by file name so every platform processes inputs in the
/// same order.
pub fn discover_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let dir = dir
        .canonicalize()
        .map_err(|e| format!("Failed to resolve directory '{}': {}", dir.display(), e))?;

    let entries = fs::read_dir(&dir)
        .map_err(|e| format!("Failed to list directory '{}': {}", dir.display(), e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| format!("Failed to read entry in '{}': {}", dir.display(), e))?;
        let path = entry.path();
        // `is_file` follows symlinks
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// True when the last four characters of the path are exactly `.csv`.
///
/// Case-sensitive on purpose: `data.CSV` and `data.csv.bak` are rejected,
/// a file literally named `.csv` is accepted.
pub fn is_eligible(path: &Path) -> bool {
    path.to_string_lossy().ends_with(CSV_SUFFIX)
}

/// Eligible inputs from a discovery listing, minus the output file itself
pub fn eligible_files(paths: &[PathBuf], output: Option<&Path>) -> Vec<PathBuf> {
    let output = output.and_then(|p| p.canonicalize().ok());
    paths
        .iter()
        .filter(|p| is_eligible(p))
        .filter(|p| match &output {
            Some(out) => p.canonicalize().map(|c| &c != out).unwrap_or(true),
            None => true,
        })
        .cloned()
        .collect()
}

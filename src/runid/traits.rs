// traits.rs - Core trait for run identifier sources

use std::fmt::Debug;
use std::path::Path;

/// Supplies the run identifier for each input file.
///
/// Any string is a valid identifier, including the empty string. Errors are
/// reserved for the source itself failing (closed input, missing entry).
pub trait RunIdSource: Debug {
    /// Return the run identifier for `file_path`
    fn run_id_for(&mut self, file_path: &Path) -> Result<String, String>;

    /// Get a human-readable name for this source
    fn name(&self) -> &'static str;
}

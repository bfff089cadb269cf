// lib.rs - runmerge library root

//! # runmerge - merge load-test CSV exports into one table tagged by run ID
//!
//! Load-testing tools export one delimited results file per test run. This
//! library stacks those files into a single table and adds a `RunID` column
//! so every row still tells which run it came from.
//!
//! ## Pipeline
//!
//! - **Discovery**: regular files in one directory, sorted by name
//! - **Eligibility**: paths ending in the literal suffix `.csv`
//! - **Tagging**: one run identifier per file from a pluggable [`RunIdSource`]
//! - **Export**: column union, missing cells as `.`, written as `;`-delimited text
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use runmerge::prelude::*;
//! use std::collections::HashMap;
//! use std::path::Path;
//!
//! let mut ids = MappingRunIdSource::new(HashMap::from([
//!     ("baseline.csv".to_string(), "run1".to_string()),
//!     ("tuned.csv".to_string(), "run2".to_string()),
//! ]));
//!
//! let summary = run_merge(
//!     Path::new("exports"),
//!     Path::new("GlobalResults.csv"),
//!     &mut ids,
//!     &MergeOptions::default(),
//! )?;
//! println!("{} rows written", summary.rows);
//! # Ok::<(), String>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod output;
pub mod runid;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{concat_tables, run_merge, tag_files, CombinedTable};
    pub use crate::core::{MergeOptions, MergeSummary};
    pub use crate::data::{discover_files, is_eligible, SourceTable};
    pub use crate::output::write_combined;
    pub use crate::runid::{ConsoleRunIdSource, MappingRunIdSource, RunIdSource};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, ValidationResult};
pub use core::{CombinedTable, MergeOptions, MergeSummary};
pub use data::SourceTable;
pub use runid::{ConsoleRunIdSource, MappingRunIdSource, RunIdSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("runmerge v{} - Load-test export merger", VERSION)
}

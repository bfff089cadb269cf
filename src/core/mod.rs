// mod.rs - Core merge module

pub mod concat;
pub mod pipeline;

// Re-export main types for convenience
pub use concat::{concat_tables, CombinedTable};
pub use pipeline::{
    dry_run, resolve_output, run_merge, tag_files, MergeOptions, MergeSummary, DEFAULT_DELIMITER,
    DEFAULT_NA_REP, DEFAULT_OUTPUT,
};

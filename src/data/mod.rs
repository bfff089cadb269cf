// mod.rs - Data structures module

pub mod discovery;
pub mod loaders;
pub mod table;

// Re-export main types for convenience
pub use discovery::{discover_files, eligible_files, is_eligible};
pub use table::{Cell, SourceTable, DEFAULT_RUN_ID_COLUMN};

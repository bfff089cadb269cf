// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use std::collections::HashMap;

impl Args {
    /// Merge with configuration from file.
    /// CLI arguments take precedence over config file values; the inline
    /// `[run_ids]` table is returned separately.
    pub fn merge_with_config(mut self, config: Config) -> (Self, HashMap<String, String>) {
        // Input/Output
        if self.dir.is_none() {
            self.dir = config.dir;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Table format (only override defaults, not explicit CLI values)
        if let Some(delimiter) = config.delimiter {
            if self.delimiter == ";" {
                self.delimiter = delimiter;
            }
        }
        if let Some(na_rep) = config.na_rep {
            if self.na_rep == "." {
                self.na_rep = na_rep;
            }
        }
        if let Some(column) = config.run_id_column {
            if self.run_id_column == "RunID" {
                self.run_id_column = column;
            }
        }

        // Run identifiers
        if self.ids.is_none() {
            self.ids = config.ids;
        }

        // Flags
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        (self, config.run_ids.unwrap_or_default())
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(
        self,
        config_path: &str,
    ) -> Result<(Self, HashMap<String, String>), String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

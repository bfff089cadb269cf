// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub dir: Option<String>,
    pub output: Option<String>,

    // Table format
    pub delimiter: Option<String>,
    pub na_rep: Option<String>,
    pub run_id_column: Option<String>,

    // Run identifiers
    pub ids: Option<String>,
    pub run_ids: Option<HashMap<String, String>>,

    // Flags
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# runmerge.toml - Configuration file for runmerge
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Directory scanned for exported .csv files (default: current directory)
dir = "/path/to/exports"

# Output file; relative paths are placed inside `dir`
output = "GlobalResults.csv"

# =============================================================================
# TABLE FORMAT
# =============================================================================

# Field delimiter used for every input and for the output
delimiter = ";"

# Placeholder written for cells a source file does not have
na_rep = "."

# Name of the column holding the run identifier
run_id_column = "RunID"

# =============================================================================
# RUN IDENTIFIERS
# =============================================================================

# Mapping file (.toml or .json) of file name -> run ID
# ids = "run_ids.toml"

# Inline mapping; files without an entry here or in `ids` make the run fail.
# Leave both out to be prompted for every file.
# [run_ids]
# "baseline.csv" = "run1"
# "tuned.csv" = "run2"

# =============================================================================
# FLAGS
# =============================================================================

# List eligible inputs without prompting or writing
dry_run = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(config.delimiter.as_deref(), Some(";"));
        assert_eq!(config.na_rep.as_deref(), Some("."));
        assert_eq!(config.output.as_deref(), Some("GlobalResults.csv"));
        assert!(config.run_ids.is_none());
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runmerge.toml");

        let mut config = Config::new();
        config.output = Some("merged.csv".to_string());
        config.run_ids = Some(HashMap::from([("a.csv".to_string(), "run1".to_string())]));
        config.to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.output.as_deref(), Some("merged.csv"));
        assert_eq!(
            loaded.run_ids.unwrap().get("a.csv").map(String::as_str),
            Some("run1")
        );
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "delimiter = [").unwrap();
        assert!(Config::from_file(&path).is_err());
    }
}

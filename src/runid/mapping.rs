// mapping.rs - Pre-supplied run identifier mapping

use super::traits::RunIdSource;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Looks identifiers up by file name, then by full path
#[derive(Debug, Clone, Default)]
pub struct MappingRunIdSource {
    ids: HashMap<String, String>,
}

impl MappingRunIdSource {
    pub fn new(ids: HashMap<String, String>) -> Self {
        Self { ids }
    }

    /// Load a mapping from a `.toml` or `.json` file of `file = "run id"` pairs
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read run ID file '{}': {}", path.display(), e))?;

        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("toml");

        let ids: HashMap<String, String> = match extension {
            "json" => serde_json::from_str(&content)
                .map_err(|e| format!("Failed to parse run ID file '{}': {}", path.display(), e))?,
            _ => toml::from_str(&content)
                .map_err(|e| format!("Failed to parse run ID file '{}': {}", path.display(), e))?,
        };

        println!("📋 Loaded {} run IDs from '{}'", ids.len(), path.display());
        Ok(Self { ids })
    }

    /// Add entries that are not already present
    pub fn extend_missing(&mut self, other: HashMap<String, String>) {
        for (file, id) in other {
            self.ids.entry(file).or_insert(id);
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl RunIdSource for MappingRunIdSource {
    fn run_id_for(&mut self, file_path: &Path) -> Result<String, String> {
        let by_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| self.ids.get(n));

        let found = by_name.or_else(|| file_path.to_str().and_then(|p| self.ids.get(p)));

        match found {
            Some(id) => {
                println!("🏷️  {} -> {}", file_path.display(), id);
                Ok(id.clone())
            }
            None => Err(format!("No run ID supplied for '{}'", file_path.display())),
        }
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}

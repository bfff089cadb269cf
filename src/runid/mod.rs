// mod.rs - Run identifier sources

pub mod console;
pub mod mapping;
pub mod traits;

// Re-export main types for convenience
pub use console::ConsoleRunIdSource;
pub use mapping::MappingRunIdSource;
pub use traits::RunIdSource;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::path::Path;

    #[test]
    fn test_console_source_reads_one_line_per_file() {
        let input = Cursor::new("run1\r\n  run 2 \n\n");
        let mut source = ConsoleRunIdSource::new(input, Vec::new());

        assert_eq!(source.run_id_for(Path::new("/d/a.csv")).unwrap(), "run1");
        assert_eq!(source.run_id_for(Path::new("/d/b.csv")).unwrap(), "  run 2 ");
        assert_eq!(source.run_id_for(Path::new("/d/c.csv")).unwrap(), "");
        assert_eq!(source.name(), "console");

        let transcript = String::from_utf8(source.into_output()).unwrap();
        assert!(transcript.starts_with("RunID needed for the following file: /d/a.csv\n"));
        assert_eq!(transcript.matches("please provide runid: ").count(), 3);
    }

    #[test]
    fn test_console_source_last_line_without_newline() {
        let mut source = ConsoleRunIdSource::new(Cursor::new("final"), Vec::new());
        assert_eq!(source.run_id_for(Path::new("a.csv")).unwrap(), "final");
    }

    #[test]
    fn test_console_source_eof_is_an_error() {
        let mut source = ConsoleRunIdSource::new(Cursor::new(""), Vec::new());
        let err = source.run_id_for(Path::new("a.csv")).unwrap_err();
        assert!(err.contains("Input closed"));
    }

    #[test]
    fn test_mapping_source_by_name_and_path() {
        let mut ids = HashMap::new();
        ids.insert("a.csv".to_string(), "run1".to_string());
        ids.insert("/other/b.csv".to_string(), "run2".to_string());
        let mut source = MappingRunIdSource::new(ids);

        assert_eq!(source.run_id_for(Path::new("/d/a.csv")).unwrap(), "run1");
        assert_eq!(source.run_id_for(Path::new("/other/b.csv")).unwrap(), "run2");
        assert!(source.run_id_for(Path::new("/d/c.csv")).is_err());
        assert_eq!(source.name(), "mapping");
    }

    #[test]
    fn test_mapping_extend_missing_keeps_existing() {
        let mut source = MappingRunIdSource::new(HashMap::from([(
            "a.csv".to_string(),
            "cli".to_string(),
        )]));
        source.extend_missing(HashMap::from([
            ("a.csv".to_string(), "config".to_string()),
            ("b.csv".to_string(), "config".to_string()),
        ]));

        assert_eq!(source.len(), 2);
        assert_eq!(source.run_id_for(Path::new("a.csv")).unwrap(), "cli");
    }

    #[test]
    fn test_mapping_from_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("ids.toml");
        std::fs::write(&toml_path, "\"a.csv\" = \"run1\"\n\"b.csv\" = \"\"\n").unwrap();
        let mut from_toml = MappingRunIdSource::from_file(&toml_path).unwrap();
        assert_eq!(from_toml.run_id_for(Path::new("b.csv")).unwrap(), "");

        let json_path = dir.path().join("ids.json");
        std::fs::write(&json_path, r#"{"a.csv": "run1"}"#).unwrap();
        let mut from_json = MappingRunIdSource::from_file(&json_path).unwrap();
        assert_eq!(from_json.run_id_for(Path::new("a.csv")).unwrap(), "run1");

        let bad_path = dir.path().join("bad.json");
        std::fs::write(&bad_path, "[1, 2]").unwrap();
        assert!(MappingRunIdSource::from_file(&bad_path).is_err());
    }
}

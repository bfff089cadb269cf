// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::{MergeOptions, DEFAULT_OUTPUT};
use std::path::{Path, PathBuf};

pub struct ValidationResult {
    pub directory: PathBuf,
    pub output: PathBuf,
    pub options: MergeOptions,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let directory = PathBuf::from(args.dir.as_deref().unwrap_or("."));
    if !directory.is_dir() {
        return Err(format!(
            "Directory '{}' does not exist or is not a directory",
            directory.display()
        ));
    }

    let output = PathBuf::from(args.output.as_deref().unwrap_or(DEFAULT_OUTPUT));
    if output.as_os_str().is_empty() {
        return Err("--output must not be empty".to_string());
    }
    if output.file_name().is_none() {
        return Err(format!("--output '{}' does not name a file", output.display()));
    }

    let delimiter = parse_delimiter(&args.delimiter)?;

    if args.run_id_column.is_empty() {
        return Err("--run-id-column must not be empty".to_string());
    }

    if let Some(ids) = &args.ids {
        if !Path::new(ids).is_file() {
            return Err(format!("Run ID file '{}' not found", ids));
        }
    }

    Ok(ValidationResult {
        directory,
        output,
        options: MergeOptions {
            delimiter,
            na_rep: args.na_rep.clone(),
            run_id_column: args.run_id_column.clone(),
        },
    })
}

/// Parse a delimiter argument into a single byte (`tab` and `\t` mean TAB)
pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    let delimiter = match value {
        "tab" | "\\t" => "\t",
        other => other,
    };

    let bytes = delimiter.as_bytes();
    if bytes.len() != 1 || !bytes[0].is_ascii() {
        return Err(format!(
            "Invalid delimiter '{}': must be a single ASCII character",
            value
        ));
    }
    match bytes[0] {
        b'"' | b'\n' | b'\r' => Err(format!(
            "Invalid delimiter '{}': quotes and line breaks are reserved",
            value.escape_default()
        )),
        b => Ok(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter(","), Ok(b','));
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("§").is_err());
        assert!(parse_delimiter("\"").is_err());
        assert!(parse_delimiter("\n").is_err());
    }

    #[test]
    fn test_defaults_validate() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Args::default()
        };

        let result = validate_args(&args).unwrap();
        assert_eq!(result.output, PathBuf::from("GlobalResults.csv"));
        assert_eq!(result.options, MergeOptions::default());
    }

    #[test]
    fn test_rejects_bad_arguments() {
        let dir = tempfile::tempdir().unwrap();
        let dir_arg = Some(dir.path().to_string_lossy().into_owned());

        let missing_dir = Args {
            dir: Some(dir.path().join("missing").to_string_lossy().into_owned()),
            ..Args::default()
        };
        assert!(validate_args(&missing_dir).is_err());

        let empty_column = Args {
            dir: dir_arg.clone(),
            run_id_column: String::new(),
            ..Args::default()
        };
        assert!(validate_args(&empty_column).is_err());

        let missing_ids = Args {
            dir: dir_arg,
            ids: Some(dir.path().join("ids.toml").to_string_lossy().into_owned()),
            ..Args::default()
        };
        assert!(validate_args(&missing_ids)
            .err()
            .unwrap()
            .contains("not found"));
    }
}

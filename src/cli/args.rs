// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs, Debug)]
/// runmerge - Merge load-test CSV exports into one table tagged by run ID
pub struct Args {
    /// directory scanned for .csv inputs (default: current directory)
    #[argh(option)]
    pub dir: Option<String>,

    /// output file, relative paths resolve inside --dir (default: GlobalResults.csv)
    #[argh(option)]
    pub output: Option<String>,

    /// field delimiter for input and output (default: ;)
    #[argh(option, default = "String::from(\";\")")]
    pub delimiter: String,

    /// placeholder written for missing cells (default: .)
    #[argh(option, default = "String::from(\".\")")]
    pub na_rep: String,

    /// name of the run identifier column (default: RunID)
    #[argh(option, default = "String::from(\"RunID\")")]
    pub run_id_column: String,

    /// run ID mapping file (.toml or .json, file name = run ID) instead of prompting
    #[argh(option)]
    pub ids: Option<String>,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// list eligible inputs without prompting or writing (dry run)
    #[argh(switch)]
    pub dry_run: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            dir: None,
            output: None,
            delimiter: ";".to_string(),
            na_rep: ".".to_string(),
            run_id_column: "RunID".to_string(),
            ids: None,
            config: None,
            generate_config: false,
            dry_run: false,
        }
    }
}

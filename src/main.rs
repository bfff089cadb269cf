// main.rs - CLI entry point

use runmerge::cli::Config;
use runmerge::core::dry_run;
use runmerge::prelude::*;
use std::collections::HashMap;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    let mut inline_ids: HashMap<String, String> = HashMap::new();
    if let Some(config_path) = args.config.clone() {
        let (merged, run_ids) = args.with_config_file(&config_path)?;
        args = merged;
        inline_ids = run_ids;
    }

    let validation = validate_args(&args)?;

    println!("🚀 runmerge v{}", runmerge::VERSION);
    println!(
        "📁 Directory: {} → output: {}",
        validation.directory.display(),
        validation.output.display()
    );

    if args.dry_run {
        let tables = dry_run(&validation.directory, &validation.output, &validation.options)?;
        let total_rows: usize = tables.iter().map(|t| t.row_count()).sum();
        println!(
            "✅ Dry run completed successfully: {} files, {} rows",
            tables.len(),
            total_rows
        );
        return Ok(());
    }

    let start = Instant::now();

    // Pre-supplied identifiers replace the prompt entirely
    let mut source: Box<dyn RunIdSource> = match &args.ids {
        Some(path) => {
            let mut mapping = MappingRunIdSource::from_file(path)?;
            mapping.extend_missing(inline_ids);
            Box::new(mapping)
        }
        None if !inline_ids.is_empty() => Box::new(MappingRunIdSource::new(inline_ids)),
        None => Box::new(ConsoleRunIdSource::stdio()),
    };
    println!("🏷️  Run IDs from: {}", source.name());

    let summary = run_merge(
        &validation.directory,
        &validation.output,
        source.as_mut(),
        &validation.options,
    )?;

    println!("\n🎉 === MERGE COMPLETED SUCCESSFULLY ===");
    println!(
        "📊 {} files → {} rows × {} columns",
        summary.files.len(),
        summary.rows,
        summary.columns
    );
    println!("📁 Output written to: {}", summary.output_path.display());
    println!(
        "⏱️  Finished at {} ({:.2?})",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        start.elapsed()
    );
    Ok(())
}

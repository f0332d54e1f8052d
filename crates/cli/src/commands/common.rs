//! Helpers shared across CLI commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use console::style;
use swagen_core::{ConfigFile, DEFAULT_CONFIG_FILE, GenerationReport};
use tracing::debug;

/// Config path given on the command line, or the default file name.
pub fn config_path(arg: Option<PathBuf>) -> PathBuf {
    arg.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Read a config file, naming the path when it is missing.
pub fn read_config(path: &Path) -> Result<ConfigFile, String> {
    if !path.exists() {
        return Err(format!(
            "Config file not found: {} (run `swagen init` to create one)",
            path.display()
        ));
    }
    swagen_core::config::load(path).map_err(|err| err.to_string())
}

/// Validate `file` and run the generator, printing a summary.
pub async fn generate_from(file: ConfigFile) -> Result<(), String> {
    let config = file.validate().map_err(|err| err.to_string())?;
    debug!(input = %config.input, output = %config.output.display(), "Starting generation.");

    let start_time = Instant::now();
    let report = swagen_core::generate(&config)
        .await
        .map_err(|err| err.to_string())?;
    print_report(&report, config.lint.as_deref(), start_time);
    Ok(())
}

fn print_report(report: &GenerationReport, lint: Option<&str>, start_time: Instant) {
    println!(
        "{} Generated {} files in {} ({} operations, {} types) in {}",
        style("✅").green(),
        report.files.len(),
        style(report.output.display()).cyan(),
        report.operations,
        report.types,
        format_elapsed_ms(start_time)
    );

    let warnings = report.diagnostics.warning_count();
    if warnings > 0 {
        println!(
            "{}",
            style(format!("⚠️  {warnings} warning(s) while generating, see log above")).yellow()
        );
    }

    if let (Some(command), Some(false)) = (lint, report.formatted) {
        println!(
            "{}",
            style(format!("⚠️  Formatter `{command}` failed, output left unformatted")).yellow()
        );
    }
}

pub fn format_elapsed_ms(start: Instant) -> String {
    let elapsed = start.elapsed();
    if elapsed.as_secs() == 0 {
        return format!("{}ms", elapsed.as_millis());
    }
    let seconds = elapsed.as_secs();
    let remaining_ms = elapsed.subsec_millis();
    format!("{seconds}s {remaining_ms}ms")
}

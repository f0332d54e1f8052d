use clap::Args;
use console::style;
use std::path::PathBuf;
use swagen_core::DocumentSummary;

use super::common::{config_path, read_config};
use super::run_cli_async;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Config file. Defaults to swagen.config.json"
    )]
    pub config: Option<PathBuf>,
}

pub async fn run(args: ValidateArgs) -> i32 {
    run_cli_async(|| run_inner(args)).await
}

async fn run_inner(args: ValidateArgs) -> Result<(), String> {
    let path = config_path(args.config);
    let config = read_config(&path)?
        .validate()
        .map_err(|err| err.to_string())?;
    println!(
        "{} Config file is valid: {}",
        style("✅").green(),
        path.display()
    );

    // A document that cannot be loaded does not invalidate the config.
    match swagen_core::summarize(&config).await {
        Ok(summary) => print_summary(&summary),
        Err(err) => println!(
            "{}",
            style(format!("⚠️  Could not load API document: {err}")).yellow()
        ),
    }
    Ok(())
}

fn print_summary(summary: &DocumentSummary) {
    println!(
        "{} API document loaded: {} v{}",
        style("✅").green(),
        style(&summary.title).bold(),
        summary.version
    );
    if let Some(base_url) = &summary.base_url {
        println!("   Base URL:   {base_url}");
    }
    println!("   Operations: {}", summary.operations);
    println!("   Types:      {}", summary.types);
    if summary.tags.is_empty() {
        println!("   Tags:       (none)");
    } else {
        println!("   Tags:       {}", summary.tags.join(", "));
    }
    let warnings = summary.diagnostics.warning_count();
    if warnings > 0 {
        println!(
            "{}",
            style(format!("⚠️  {warnings} warning(s) found in the document")).yellow()
        );
    }
}

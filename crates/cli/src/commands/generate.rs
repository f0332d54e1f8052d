use clap::Args;
use std::path::PathBuf;
use swagen_core::ConfigFile;

use super::common::{config_path, generate_from, read_config};
use super::run_cli_async;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Config file. Defaults to swagen.config.json"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH_OR_URL",
        help = "API document path or http(s) URL"
    )]
    pub input: Option<String>,
    #[arg(short = 'o', long = "output", value_name = "DIR", help = "Output directory")]
    pub output: Option<PathBuf>,
    #[arg(long = "no-types", help = "Skip the types unit")]
    pub no_types: bool,
    #[arg(long = "no-group", help = "Put every operation in a single api unit")]
    pub no_group: bool,
}

pub async fn run(args: GenerateArgs) -> i32 {
    run_cli_async(|| run_inner(args)).await
}

async fn run_inner(args: GenerateArgs) -> Result<(), String> {
    let file = resolve_config(args)?;
    generate_from(file).await
}

/// Flags alone when both `-i` and `-o` are given without `-c`, otherwise the
/// config file with any flags applied on top.
fn resolve_config(args: GenerateArgs) -> Result<ConfigFile, String> {
    let flags_only = args.config.is_none() && args.input.is_some() && args.output.is_some();
    let mut file = if flags_only {
        ConfigFile::default()
    } else {
        read_config(&config_path(args.config))?
    };

    if let Some(input) = args.input {
        file.input = input;
    }
    if let Some(output) = args.output {
        file.output = output.display().to_string();
    }
    if args.no_types {
        file.options.generate_models = false;
    }
    if args.no_group {
        file.group_by_tags = false;
    }
    Ok(file)
}

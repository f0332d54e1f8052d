use clap::Args;
use std::path::PathBuf;

use super::common::{config_path, generate_from, read_config};
use super::run_cli_async;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Config file. Defaults to swagen.config.json"
    )]
    pub config: Option<PathBuf>,
}

pub async fn run(args: RunArgs) -> i32 {
    run_cli_async(|| async move {
        let file = read_config(&config_path(args.config))?;
        generate_from(file).await
    })
    .await
}

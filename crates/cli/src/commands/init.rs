use clap::Args;
use console::style;
use std::fs;
use std::path::{Path, PathBuf};
use swagen_core::{ConfigFile, DEFAULT_CONFIG_FILE};
use tracing::debug;

use super::run_cli_async;

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    #[arg(short = 'f', long = "force", help = "Overwrite an existing config file")]
    pub force: bool,
}

pub async fn run(args: InitArgs) -> i32 {
    run_cli_async(|| async move {
        let dir = std::env::current_dir()
            .map_err(|err| format!("Failed to determine current directory: {err}"))?;
        let path = write_template(&dir, args.force)?;
        println!(
            "{} Config file created: {}",
            style("✅").green(),
            style(path.display()).cyan()
        );
        println!("💡 Adjust it as needed, then run `swagen generate`");
        Ok(())
    })
    .await
}

fn write_template(dir: &Path, force: bool) -> Result<PathBuf, String> {
    let path = dir.join(DEFAULT_CONFIG_FILE);
    if path.exists() && !force {
        return Err(format!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        ));
    }

    let text = ConfigFile::template()
        .to_json_pretty()
        .map_err(|err| err.to_string())?;
    fs::write(&path, text)
        .map_err(|err| format!("Failed to write {}: {err}", path.display()))?;
    debug!(path = %path.display(), "Wrote config template.");
    Ok(path)
}

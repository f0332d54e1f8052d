//! Command-line interface for the `swagen` client generator.

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod commands;

#[derive(Parser)]
#[command(
    name = "swagen",
    version,
    about = "Generate TypeScript API clients from Swagger / OpenAPI documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the client from flags or a config file
    #[command(alias = "gen")]
    Generate(commands::generate::GenerateArgs),
    /// Write a default config file
    Init(commands::init::InitArgs),
    /// Check a config file and the document it points at
    Validate(commands::validate::ValidateArgs),
    /// Generate the client from a config file
    Run(commands::run::RunArgs),
}

/// Parse `args` and run the selected command on a fresh runtime.
pub fn run_cli(args: Vec<String>) -> i32 {
    init_tracing();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to create tokio runtime: {err}");
            return 1;
        }
    };

    runtime.block_on(run_cli_async(args))
}

/// Parse `args` and run the selected command, returning the exit code.
pub async fn run_cli_async(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(Commands::Generate(args)) => commands::generate::run(args).await,
            Some(Commands::Init(args)) => commands::init::run(args).await,
            Some(Commands::Validate(args)) => commands::validate::run(args).await,
            Some(Commands::Run(args)) => commands::run::run(args).await,
            None => {
                let mut cmd = Cli::command();
                let _ = cmd.print_help();
                println!();
                0
            }
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

const LOG_ENV: &str = "SWAGEN_LOG";
const LOG_TARGETS: [&str; 2] = ["swagen_core", "swagen_cli"];

fn init_tracing() {
    // SWAGEN_LOG controls log level: "trace", "debug", "info", "warn", "error"
    // or a full tracing filter spec like "swagen_core=debug,reqwest=warn"
    let filter = log_filter(std::env::var(LOG_ENV).ok().as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn log_filter(value: Option<&str>) -> String {
    match value {
        Some(level) if is_plain_level(level) => LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(","),
        Some(spec) if !spec.trim().is_empty() => spec.to_string(),
        _ => log_filter(Some("info")),
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_log_filter_plain_level() {
        assert_eq!(
            log_filter(Some("debug")),
            "swagen_core=debug,swagen_cli=debug"
        );
        assert_eq!(log_filter(None), "swagen_core=info,swagen_cli=info");
    }

    #[test]
    fn test_log_filter_full_spec() {
        assert_eq!(
            log_filter(Some("swagen_core=trace,reqwest=warn")),
            "swagen_core=trace,reqwest=warn"
        );
    }

    #[test]
    fn test_gen_alias_and_flags() {
        let cli = parse(&[
            "swagen", "gen", "-i", "api.json", "-o", "out", "--no-types", "--no-group",
        ]);
        let Some(Commands::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.input.as_deref(), Some("api.json"));
        assert_eq!(args.output.as_deref(), Some(std::path::Path::new("out")));
        assert!(args.no_types);
        assert!(args.no_group);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_init_force_flag() {
        let cli = parse(&["swagen", "init", "--force"]);
        assert!(matches!(cli.command, Some(Commands::Init(args)) if args.force));
    }

    #[test]
    fn test_validate_and_run_take_config() {
        let cli = parse(&["swagen", "validate", "-c", "custom.json"]);
        assert!(matches!(cli.command, Some(Commands::Validate(_))));
        let cli = parse(&["swagen", "run", "--config", "custom.json"]);
        assert!(matches!(cli.command, Some(Commands::Run(_))));
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["swagen", "publish"]).is_err());
    }
}

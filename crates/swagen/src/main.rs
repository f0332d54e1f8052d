//! `swagen` binary entry point.

fn main() {
    let args: Vec<String> = std::env::args().collect();
    std::process::exit(swagen_cli::run_cli(args));
}

//! Main entry point for the blp-converter CLI

mod cli;
mod commands;
mod utils;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    // Usage errors exit non-zero here
    let cli = Cli::parse();

    // Verbosity flags pick the default filter, RUST_LOG still overrides it
    let default_filter = match (cli.verbose, cli.quiet) {
        (0, true) => "error",
        (0, false) => "warn",
        (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let tally = commands::execute(&cli);
    log::debug!(
        "Processed {} file(s), {} failed",
        tally.total,
        tally.total - tally.succeeded
    );
}

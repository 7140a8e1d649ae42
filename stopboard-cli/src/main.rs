//! Stopboard CLI - command-line front end for the Stopboard assignment board
//!
//! Loads a seed, replays scripted drag-and-drop sessions and prints the
//! resulting board.

mod cli;
mod commands;
mod error;
mod util;

use clap::Parser;
use cli::Cli;
use stopboard_core::tracing::{TracingConfig, TracingLevel, TracingOutput, init_tracing};

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let level = if cli.quiet {
        TracingLevel::Error
    } else {
        TracingLevel::from_verbosity(cli.verbose)
    };
    let mut tracing_config = TracingConfig::new().with_level(level);
    if let Some(path) = &cli.log_file {
        tracing_config = tracing_config.with_output(TracingOutput::File { path: path.clone() });
    }
    if let Err(e) = init_tracing(&tracing_config) {
        eprintln!("Warning: {e}");
    }

    let result = commands::dispatch(config_path, cli.command);

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

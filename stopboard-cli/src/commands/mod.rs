//! Command handler modules for the CLI.

mod demo;
mod run;
mod show;

use std::path::Path;

use crate::cli::Commands;
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(config_path: Option<&Path>, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Show {
            seed,
            format,
            show_private,
            division,
        } => show::cmd_show(config_path, seed.as_deref(), format, show_private, division),
        Commands::Run {
            script,
            seed,
            format,
            sequential,
        } => run::cmd_run(config_path, &script, seed.as_deref(), format, sequential),
        Commands::Demo { delay_ms, format } => demo::cmd_demo(config_path, delay_ms, format),
    }
}

//! Demo command.

use std::path::Path;
use std::time::Duration;

use stopboard_core::seed::DemoSeedSource;

use super::show::print_board;
use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::util::{build_board, load_settings};

/// Demo command handler
pub fn cmd_demo(
    config_path: Option<&Path>,
    delay_ms: u64,
    format: OutputFormat,
) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let source = DemoSeedSource::with_delay(Duration::from_millis(delay_ms));

    tracing::info!(delay_ms, "Fetching demo seed");
    let board = build_board(&settings, &source)?;

    print_board(&board.snapshot(), format, None)
}

//! Shared utility functions used across command modules.

use std::path::Path;
use std::time::Duration;

use stopboard_core::board::Board;
use stopboard_core::config::{BoardSettings, ConfigManager};
use stopboard_core::seed::{DemoSeedSource, FileSeedSource, SeedSource, seed_board};

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Loads board settings, falling back to defaults when no file exists
pub fn load_settings(config_path: Option<&Path>) -> Result<BoardSettings, CliError> {
    create_config_manager(config_path)?
        .load_settings()
        .map_err(|e| CliError::Config(format!("Failed to load settings: {e}")))
}

/// Picks the seed source: the given file, or the demo data with `delay`
pub fn seed_source(seed: Option<&Path>, delay: Duration) -> Box<dyn SeedSource> {
    match seed {
        Some(path) => Box::new(FileSeedSource::new(path)),
        None => Box::new(DemoSeedSource::with_delay(delay)),
    }
}

/// Builds a board from settings and seeds it from `source`
pub fn build_board(settings: &BoardSettings, source: &dyn SeedSource) -> Result<Board, CliError> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Config(format!("Failed to create async runtime: {e}")))?;

    let mut board = Board::from_settings(settings);
    runtime.block_on(seed_board(&mut board, source))?;
    Ok(board)
}

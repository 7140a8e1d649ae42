//! CLI error types and exit codes.

use stopboard_core::error::StopboardError;

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, I/O or other failures
    pub const GENERAL_ERROR: i32 = 1;
    /// Bad input - unreadable seed or script, or data the board rejects
    pub const INPUT_ERROR: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Seed error
    #[error("Seed error: {0}")]
    Seed(String),

    /// Board rejected the seed data
    #[error("Board error: {0}")]
    Board(String),

    /// Script error
    #[error("Script error: {0}")]
    Script(String),

    /// Output serialization error
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopboardError> for CliError {
    fn from(err: StopboardError) -> Self {
        match err {
            StopboardError::Board(e) => Self::Board(e.to_string()),
            StopboardError::Config(e) => Self::Config(e.to_string()),
            StopboardError::Seed(e) => Self::Seed(e.to_string()),
            StopboardError::Io(e) => Self::Io(e),
        }
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, output, IO)
    /// - 2: Input error (seed, script, board setup)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Seed(_) | Self::Board(_) | Self::Script(_) => exit_codes::INPUT_ERROR,
            Self::Config(_) | Self::Output(_) | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}

//! Tracing integration for structured logging
//!
//! Wires the `tracing` crate into Stopboard: subscriber setup for the CLI
//! (stderr or a log file) and the span names used across the board crates.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Global flag indicating whether tracing has been initialized
static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// Tracing already initialized
    #[error("Tracing has already been initialized")]
    AlreadyInitialized,

    /// Failed to create log file
    #[error("Failed to create log file {path}: {reason}")]
    FileCreationFailed {
        /// Requested log file
        path: PathBuf,
        /// Underlying I/O error
        reason: String,
    },
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Log level for the board crates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingLevel {
    /// Only errors
    Error,
    /// Errors and warnings
    #[default]
    Warn,
    /// Errors, warnings and info
    Info,
    /// All above plus debug messages
    Debug,
    /// Everything
    Trace,
}

impl TracingLevel {
    /// Maps a `-v` count to a level: 0 is warn, 1 info, 2 debug, 3+ trace
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl std::str::FromStr for TracingLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TracingOutput {
    /// Standard error, keeping stdout free for board output
    #[default]
    Stderr,
    /// A log file, truncated on start and written without ANSI colors
    File {
        /// Path to the log file
        path: PathBuf,
    },
}

impl TracingOutput {
    /// Opens the destination and returns its writer plus whether ANSI
    /// colors suit it
    fn make_writer(&self) -> TracingResult<(BoxMakeWriter, bool)> {
        match self {
            Self::Stderr => Ok((BoxMakeWriter::new(std::io::stderr), true)),
            Self::File { path } => {
                let file = std::fs::File::create(path).map_err(|e| {
                    TracingError::FileCreationFailed {
                        path: path.clone(),
                        reason: e.to_string(),
                    }
                })?;
                Ok((BoxMakeWriter::new(Arc::new(file)), false))
            }
        }
    }
}

/// Configuration for tracing initialization
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Log level for the stopboard crates
    pub level: TracingLevel,
    /// Output destination
    pub output: TracingOutput,
}

impl TracingConfig {
    /// Creates a new tracing configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level
    #[must_use]
    pub const fn with_level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the output destination
    #[must_use]
    pub fn with_output(mut self, output: TracingOutput) -> Self {
        self.output = output;
        self
    }

    /// Filter directive scoping the level to the stopboard crates
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(format!(
            "stopboard_core={level},stopboard_cli={level}",
            level = self.level
        ))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Initializes the tracing subscriber with the given configuration
///
/// Call once at startup. Subsequent calls return an error.
///
/// # Errors
///
/// Returns an error if:
/// - Tracing has already been initialized
/// - The log file cannot be created
/// - The subscriber fails to install
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if TRACING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }

    let (writer, ansi) = config.output.make_writer()?;
    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(ansi)
                .with_writer(writer),
        )
        .try_init()
        .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    tracing::debug!(level = %config.level, output = ?config.output, "Tracing initialized");
    Ok(())
}

/// Macro for creating operation spans with standard fields
///
/// # Examples
///
/// ```ignore
/// use stopboard_core::trace_operation;
///
/// let _span = trace_operation!("drag.end",
///     source = %source,
///     target = %target
/// ).entered();
/// ```
#[macro_export]
macro_rules! trace_operation {
    ($name:expr) => {
        tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

/// Standard span names for Stopboard operations
pub mod span_names {
    /// Catalog or group loading
    pub const BOARD_LOAD: &str = "board.load";
    /// Drag start
    pub const DRAG_START: &str = "drag.start";
    /// Drag end and drop commit
    pub const DRAG_END: &str = "drag.end";
    /// Seed fetch from a source
    pub const SEED_FETCH: &str = "seed.fetch";
    /// Configuration load span
    pub const CONFIG_LOAD: &str = "config.load";
    /// Configuration save span
    pub const CONFIG_SAVE: &str = "config.save";
    /// Event script replay
    pub const SCRIPT_REPLAY: &str = "script.replay";
}

//! Error types for Stopboard
//!
//! Interaction paths (drag gestures, expansion toggles, removals) never
//! produce these errors; they report outcomes instead. Errors are reserved
//! for board setup, configuration and seed loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::identity::InstanceUid;
use crate::models::{GroupId, StopId};

/// Main error type for Stopboard operations
#[derive(Debug, Error)]
pub enum StopboardError {
    /// Board setup or invariant error
    #[error("Board error: {0}")]
    Board(#[from] BoardError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Seed loading error
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while setting up a board or checking its invariants
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The catalog or the group list was loaded twice
    #[error("{0} has already been loaded")]
    AlreadyLoaded(&'static str),

    /// Groups were loaded before the catalog
    #[error("catalog must be loaded before groups")]
    CatalogNotLoaded,

    /// Two catalog entries share a stop id
    #[error("duplicate stop id in catalog: {0}")]
    DuplicateStopId(StopId),

    /// Two groups share a group id
    #[error("duplicate group id: {0}")]
    DuplicateGroupId(GroupId),

    /// A group seed references a stop that is not in the catalog
    #[error("group {group} references unknown stop {stop}")]
    UnknownStop {
        /// Group whose seed is invalid
        group: GroupId,
        /// Stop id that could not be found
        stop: StopId,
    },

    /// An instance uid occurs more than once on the board
    #[error("instance uid {0} occurs more than once")]
    DuplicateInstanceUid(InstanceUid),

    /// A catalog stop is missing from the unassigned pool
    #[error("catalog stop {0} is missing from the unassigned pool")]
    MissingFromPool(StopId),
}

/// Result type alias for board setup operations
pub type BoardResult<T> = std::result::Result<T, BoardError>;

/// Errors related to settings loading and saving
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No platform configuration directory could be determined
    #[error("could not determine a configuration directory")]
    NoConfigDir,

    /// Failed to parse the settings file
    #[error("Failed to parse {path}: {reason}")]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Failed to serialize settings
    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    /// A setting has an invalid value
    #[error("Invalid value for {field}: {reason}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Reason for the failure
        reason: String,
    },

    /// I/O error while reading or writing settings
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised while fetching or parsing seed data
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file extension is not a supported format
    #[error("unsupported seed format: {0}")]
    UnsupportedFormat(String),

    /// Seed content could not be parsed
    #[error("Failed to parse seed data: {0}")]
    Parse(String),

    /// Seed file could not be read
    #[error("Failed to read seed {path}: {source}")]
    Read {
        /// Seed file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Result type alias for seed operations
pub type SeedResult<T> = std::result::Result<T, SeedError>;

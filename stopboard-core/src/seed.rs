//! Seed data
//!
//! A seed is the one-shot input that populates a board: the catalog of stops
//! plus the initial groups. Seeds come from a [`SeedSource`], either a file on
//! disk or the built-in demo data.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use crate::board::Board;
use crate::error::{SeedError, SeedResult, StopboardError};
use crate::models::{GroupSeed, Stop};
use crate::trace_operation;
use crate::tracing::span_names;

/// Catalog and groups delivered together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    /// Catalog stops, in pool display order
    #[serde(default)]
    pub stops: Vec<Stop>,
    /// Group definitions, in board order
    #[serde(default, alias = "stopGroups")]
    pub groups: Vec<GroupSeed>,
}

impl SeedData {
    /// Parses seed data from JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(content: &str) -> SeedResult<Self> {
        serde_json::from_str(content).map_err(|e| SeedError::Parse(e.to_string()))
    }

    /// Parses seed data from TOML
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed.
    pub fn from_toml(content: &str) -> SeedResult<Self> {
        toml::from_str(content).map_err(|e| SeedError::Parse(e.to_string()))
    }

    /// Parses seed data, picking the format from the file extension
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is neither `json` nor `toml`, or
    /// the content does not parse.
    pub fn parse(path: &Path, content: &str) -> SeedResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Self::from_json(content),
            "toml" => Self::from_toml(content),
            other => Err(SeedError::UnsupportedFormat(other.to_string())),
        }
    }

    /// The built-in demo: four stops, one public and one private group
    #[must_use]
    pub fn demo() -> Self {
        Self {
            stops: vec![
                Stop::new(1, "Welcome")
                    .with_room("A1")
                    .with_description("Reception and badge pickup")
                    .with_divisions(vec![1]),
                Stop::new(2, "Library")
                    .with_room("B1")
                    .with_description("Reading rooms and archive")
                    .with_divisions(vec![1, 2]),
                Stop::new(3, "Workshop")
                    .with_room("C1")
                    .with_description("Hands-on lab")
                    .with_divisions(vec![2]),
                Stop::new(4, "Cafeteria")
                    .with_room("D1")
                    .with_description("Lunch break")
                    .with_divisions(vec![3]),
            ],
            groups: vec![
                GroupSeed::new(1, "Information")
                    .with_description("Orientation for new visitors")
                    .with_stops(&[1, 2]),
                GroupSeed::new(2, "Tours")
                    .with_description("Guided tours, staff only")
                    .private(),
            ],
        }
    }
}

/// Asynchronous provider of seed data
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Fetches the seed
    ///
    /// # Errors
    ///
    /// Returns an error if the seed cannot be read or parsed.
    async fn fetch(&self) -> SeedResult<SeedData>;

    /// Human-readable description of the source, for logs
    fn describe(&self) -> String;
}

/// Seed stored in a JSON or TOML file
#[derive(Debug, Clone)]
pub struct FileSeedSource {
    path: PathBuf,
}

impl FileSeedSource {
    /// Creates a source for the given file
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the seed file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SeedSource for FileSeedSource {
    async fn fetch(&self) -> SeedResult<SeedData> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SeedError::Read {
                path: self.path.clone(),
                source,
            })?;
        SeedData::parse(&self.path, &content)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Built-in demo data, delivered after a simulated network delay
#[derive(Debug, Clone)]
pub struct DemoSeedSource {
    delay: Duration,
}

impl DemoSeedSource {
    /// Default simulated fetch delay
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

    /// Creates a demo source with the default delay
    #[must_use]
    pub const fn new() -> Self {
        Self::with_delay(Self::DEFAULT_DELAY)
    }

    /// Creates a demo source with a custom delay
    #[must_use]
    pub const fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for DemoSeedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SeedSource for DemoSeedSource {
    async fn fetch(&self) -> SeedResult<SeedData> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(SeedData::demo())
    }

    fn describe(&self) -> String {
        "demo".to_string()
    }
}

/// Fetches a seed from `source` and loads it into `board`.
///
/// # Errors
///
/// Returns a seed error if the fetch fails, or a board error if the board
/// rejects the data.
pub async fn seed_board(board: &mut Board, source: &dyn SeedSource) -> Result<(), StopboardError> {
    let span = trace_operation!(span_names::SEED_FETCH, source = %source.describe());
    let seed = source.fetch().instrument(span.clone()).await?;
    let _guard = span.enter();
    tracing::info!(
        stops = seed.stops.len(),
        groups = seed.groups.len(),
        "Seed fetched"
    );
    board.load_seed(seed)?;
    Ok(())
}

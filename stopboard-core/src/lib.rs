//! Stopboard Core Library
//!
//! Drag-and-drop assignment engine for arranging stops into groups. A board
//! holds a catalog of stops (shown as the unassigned pool) and an ordered list
//! of groups containing placed stop instances. Drag gestures, keyboard drags
//! and scripted events all end in the same drop transaction.
//!
//! # Crate Structure
//!
//! - [`models`] - Stops, placed instances, groups and group seeds
//! - [`board`] - Board state, container resolver, drop policy and snapshots
//! - [`drag_drop`] - Drag payloads, overlays and drop target selection
//! - [`keyboard`] - Keyboard-driven drags over the rendered targets
//! - [`event`] - Serializable board commands
//! - [`identity`] - Instance uid allocation
//! - [`seed`] - Seed data formats and async seed sources
//! - [`config`] - Board settings and persistence
//! - [`tracing`] - Structured logging setup

#![warn(missing_docs)]

pub mod board;
pub mod config;
pub mod drag_drop;
pub mod error;
pub mod event;
pub mod identity;
pub mod keyboard;
pub mod models;
pub mod seed;
pub mod tracing;

pub use board::{Board, BoardSnapshot, CancelReason, DropOutcome, Location, PlacementPolicy};
pub use config::{BoardSettings, ConfigManager};
pub use drag_drop::{
    ActiveDrag, DragOverlay, EntityKind, EntityRef, is_rendered_target, pick_drop_target,
    rendered_targets,
};
pub use error::{
    BoardError, BoardResult, ConfigError, ConfigResult, SeedError, SeedResult, StopboardError,
};
pub use event::{BoardEvent, EventOutcome};
pub use identity::{IdentityStrategy, InstanceUid, RandomUids, SequentialUids, UidAllocator};
pub use keyboard::{Direction, KeyboardDrag};
pub use models::{GroupId, GroupSeed, Stop, StopGroup, StopId, StopInstance, Visibility};
pub use seed::{DemoSeedSource, FileSeedSource, SeedData, SeedSource, seed_board};
pub use tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, init_tracing,
};

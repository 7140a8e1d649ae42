//! Instance identity allocation
//!
//! Every [`StopInstance`](crate::models::StopInstance) carries an
//! [`InstanceUid`] that is unique across the board for the whole session.
//! Uids are never reused, not even after the instance is destroyed.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, board-unique identifier of a placed stop.
///
/// Distinct from the catalog [`StopId`](crate::models::StopId): several
/// instances of the same stop have different uids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceUid(String);

impl InstanceUid {
    /// Wraps an existing uid string.
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    /// Returns the uid as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of fresh instance uids.
pub trait UidAllocator: fmt::Debug + Send {
    /// Returns a uid that this allocator has never returned before.
    fn next_uid(&mut self) -> InstanceUid;
}

/// Allocates random UUID v4 uids.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomUids;

impl UidAllocator for RandomUids {
    fn next_uid(&mut self) -> InstanceUid {
        InstanceUid(Uuid::new_v4().to_string())
    }
}

/// Allocates `"{prefix}-{n}"` uids from a counter.
///
/// The counter starts when the board is created, which makes uids
/// predictable for scripted runs and tests.
#[derive(Debug, Clone)]
pub struct SequentialUids {
    prefix: String,
    next: u64,
}

impl SequentialUids {
    /// Creates an allocator whose first uid is `"{prefix}-1"`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    /// Creates an allocator whose first uid is `"{prefix}-{next}"`.
    #[must_use]
    pub fn starting_at(prefix: impl Into<String>, next: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next,
        }
    }
}

impl UidAllocator for SequentialUids {
    fn next_uid(&mut self) -> InstanceUid {
        let uid = InstanceUid(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        uid
    }
}

/// Which allocator a board should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityStrategy {
    /// Random UUID v4 uids
    #[default]
    Random,
    /// Counter-based uids with a prefix
    Sequential,
}

impl IdentityStrategy {
    /// Builds an allocator for this strategy.
    ///
    /// `prefix` is only used by [`IdentityStrategy::Sequential`].
    #[must_use]
    pub fn allocator(self, prefix: &str) -> Box<dyn UidAllocator> {
        match self {
            Self::Random => Box::new(RandomUids),
            Self::Sequential => Box::new(SequentialUids::new(prefix)),
        }
    }
}

impl fmt::Display for IdentityStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Sequential => write!(f, "sequential"),
        }
    }
}

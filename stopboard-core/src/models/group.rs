//! Stop groups (the board's containers)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{StopId, StopInstance};
use crate::identity::InstanceUid;

/// Unique identifier of a stop group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visibility of a group.
///
/// Private groups are only rendered while the board's visibility filter
/// allows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Always rendered
    #[default]
    Public,
    /// Rendered only when private groups are shown
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// A named, ordered, collapsible container of stop instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopGroup {
    /// Unique group id
    pub id: GroupId,
    /// Display name
    pub name: String,
    /// Description shown under the name
    pub description: String,
    /// Public or private
    pub visibility: Visibility,
    /// Placed stops, in display order
    pub stops: Vec<StopInstance>,
    /// Whether the group's stops are rendered
    pub is_expanded: bool,
}

impl StopGroup {
    /// Creates an empty, expanded, public group
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: GroupId(id),
            name: name.into(),
            description: String::new(),
            visibility: Visibility::Public,
            stops: Vec::new(),
            is_expanded: true,
        }
    }

    /// Returns true if the group is public
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Returns the index of the instance with the given uid
    #[must_use]
    pub fn position_of(&self, uid: &InstanceUid) -> Option<usize> {
        self.stops.iter().position(|s| &s.uid == uid)
    }

    /// Returns true if the group holds the given instance
    #[must_use]
    pub fn contains(&self, uid: &InstanceUid) -> bool {
        self.position_of(uid).is_some()
    }

    /// Returns the catalog ids of the placed stops, in order
    #[must_use]
    pub fn stop_ids(&self) -> Vec<StopId> {
        self.stops.iter().map(StopInstance::stop_id).collect()
    }
}

/// Group definition as delivered by a seed source.
///
/// `stop_ids` lists the catalog stops the group starts with; the board
/// materialises one fresh instance per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSeed {
    /// Unique group id
    pub id: GroupId,
    /// Display name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Whether the group is public
    #[serde(default = "default_true", alias = "isPublic")]
    pub is_public: bool,
    /// Initial stops, in order
    #[serde(default, alias = "stopIds")]
    pub stop_ids: Vec<StopId>,
}

const fn default_true() -> bool {
    true
}

impl GroupSeed {
    /// Creates a public seed with no stops
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: GroupId(id),
            name: name.into(),
            description: String::new(),
            is_public: true,
            stop_ids: Vec::new(),
        }
    }

    /// Sets the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the seed as private
    #[must_use]
    pub const fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Sets the initial stops
    #[must_use]
    pub fn with_stops(mut self, ids: &[u32]) -> Self {
        self.stop_ids = ids.iter().copied().map(StopId).collect();
        self
    }

    /// Returns the visibility implied by `is_public`
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        if self.is_public {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }
}

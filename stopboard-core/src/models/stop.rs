//! Catalog stops

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a catalog stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(pub u32);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog stop.
///
/// Stops are loaded once and never modified by the board. Placing a stop in
/// a group embeds a copy of it in a [`StopInstance`](super::StopInstance).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Unique id across the catalog
    pub id: StopId,
    /// Display name
    pub name: String,
    /// Room or location code
    #[serde(default, alias = "roomNr")]
    pub room: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Division tags
    #[serde(default, alias = "divisionIds")]
    pub division_ids: Vec<u32>,
    /// Default group tags
    #[serde(default, alias = "stopGroupIds")]
    pub group_ids: Vec<u32>,
}

impl Stop {
    /// Creates a stop with the given id and name and empty details.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: StopId(id),
            name: name.into(),
            room: String::new(),
            description: String::new(),
            division_ids: Vec::new(),
            group_ids: Vec::new(),
        }
    }

    /// Sets the room code
    #[must_use]
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Sets the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the division tags
    #[must_use]
    pub fn with_divisions(mut self, division_ids: Vec<u32>) -> Self {
        self.division_ids = division_ids;
        self
    }

    /// Returns true if the stop is tagged with the given division
    #[must_use]
    pub fn in_division(&self, division_id: u32) -> bool {
        self.division_ids.contains(&division_id)
    }
}

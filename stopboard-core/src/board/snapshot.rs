//! Read-only board snapshots for rendering

use serde::Serialize;

use crate::drag_drop::ActiveDrag;
use crate::models::{GroupId, Stop, StopGroup};

/// Immutable view of the board after a change.
///
/// The active drag is carried for overlay rendering but is never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    /// Number of committed content changes so far
    pub revision: u64,
    /// All groups in board order, hidden ones included
    pub groups: Vec<StopGroup>,
    /// The unassigned pool in display order
    pub pool: Vec<Stop>,
    /// Whether private groups are rendered
    pub show_private: bool,
    /// In-flight drag, if any
    #[serde(skip)]
    pub active: Option<ActiveDrag>,
}

impl BoardSnapshot {
    /// Groups the presentation layer is allowed to render
    pub fn visible_groups(&self) -> impl Iterator<Item = &StopGroup> {
        self.groups
            .iter()
            .filter(move |g| self.show_private || g.is_public())
    }

    /// Looks up a group by id
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&StopGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Pool stops tagged with the given division
    #[must_use]
    pub fn pool_in_division(&self, division_id: u32) -> Vec<&Stop> {
        self.pool.iter().filter(|s| s.in_division(division_id)).collect()
    }

    /// Total number of placed instances across all groups
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.groups.iter().map(|g| g.stops.len()).sum()
    }
}

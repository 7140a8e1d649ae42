//! Container resolution
//!
//! Maps an [`EntityRef`] to the place that currently holds it. Pure reads;
//! a stale reference resolves to [`Location::NotFound`], which callers treat
//! as a no-op.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Board;
use crate::drag_drop::EntityRef;
use crate::identity::InstanceUid;
use crate::models::{GroupId, StopId, StopInstance};

/// Where an entity currently lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Inside (or being) the given group
    Group(GroupId),
    /// In (or being) the unassigned pool
    Pool,
    /// Not on the board
    NotFound,
}

impl Location {
    /// Returns false for [`Location::NotFound`]
    #[must_use]
    pub const fn is_found(self) -> bool {
        !matches!(self, Self::NotFound)
    }

    /// Returns the group id for [`Location::Group`]
    #[must_use]
    pub const fn group_id(self) -> Option<GroupId> {
        match self {
            Self::Group(id) => Some(id),
            Self::Pool | Self::NotFound => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group(id) => write!(f, "group {id}"),
            Self::Pool => write!(f, "unassigned pool"),
            Self::NotFound => write!(f, "not found"),
        }
    }
}

impl Board {
    /// Resolves which group (or the pool) currently holds an entity.
    ///
    /// A catalog stop resolves to the pool when listed there, an instance to
    /// the group whose list contains it. Groups and the pool resolve to
    /// themselves so they can serve as drop zones.
    #[must_use]
    pub fn resolve_container(&self, entity: &EntityRef) -> Location {
        match entity {
            EntityRef::Stop(id) => {
                if self.pool_index(*id).is_some() {
                    Location::Pool
                } else {
                    Location::NotFound
                }
            }
            EntityRef::Instance(uid) => self
                .groups
                .iter()
                .find(|g| g.contains(uid))
                .map_or(Location::NotFound, |g| Location::Group(g.id)),
            EntityRef::Group(id) => {
                if self.group_index(*id).is_some() {
                    Location::Group(*id)
                } else {
                    Location::NotFound
                }
            }
            EntityRef::Pool => Location::Pool,
        }
    }

    /// Returns the placed instance with the given uid
    #[must_use]
    pub fn find_instance(&self, uid: &InstanceUid) -> Option<&StopInstance> {
        self.groups
            .iter()
            .flat_map(|g| g.stops.iter())
            .find(|s| &s.uid == uid)
    }

    pub(super) fn group_index(&self, id: GroupId) -> Option<usize> {
        self.groups.iter().position(|g| g.id == id)
    }

    pub(super) fn pool_index(&self, id: StopId) -> Option<usize> {
        self.pool.iter().position(|s| s.id == id)
    }

    /// Returns (group index, instance index) for a uid
    pub(super) fn locate_instance(&self, uid: &InstanceUid) -> Option<(usize, usize)> {
        self.groups
            .iter()
            .enumerate()
            .find_map(|(gi, g)| g.position_of(uid).map(|si| (gi, si)))
    }
}

//! Drop policy
//!
//! Decides what a completed drag does. Exactly one transition fires per
//! commit, chosen by the source kind and the resolved target:
//!
//! 1. group onto group: reorder the groups
//! 2. source and target in the same place: reorder inside it
//! 3. instance onto the pool: destroy the instance (the pool is a fixed
//!    catalog view and does not change)
//! 4. anything onto another group: append a fresh instance there
//!
//! Every unresolvable case degrades to a cancelled outcome.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Board, Location};
use crate::drag_drop::EntityRef;
use crate::identity::InstanceUid;
use crate::models::{GroupId, StopId, StopInstance};

/// What happens to the source instance when a stop is dropped into another
/// group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementPolicy {
    /// The source stays where it is; the destination gains a copy.
    #[default]
    Copy,
    /// The source instance is removed once the copy is placed. Stops dragged
    /// from the pool are never removed from it.
    Move,
}

impl fmt::Display for PlacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy => write!(f, "copy"),
            Self::Move => write!(f, "move"),
        }
    }
}

/// Why a drag ended without a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// The drop had no target
    NoTarget,
    /// The dragged entity is no longer on the board
    StaleSource,
    /// The target is no longer on the board
    StaleTarget,
    /// The target does not accept this kind of source
    IncompatibleTarget,
    /// The source kind cannot be dragged
    NotDraggable,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTarget => write!(f, "no target"),
            Self::StaleSource => write!(f, "stale source"),
            Self::StaleTarget => write!(f, "stale target"),
            Self::IncompatibleTarget => write!(f, "incompatible target"),
            Self::NotDraggable => write!(f, "not draggable"),
        }
    }
}

/// Result of a drag end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DropOutcome {
    /// A group moved within the group list
    GroupsReordered {
        /// Dragged group
        group: GroupId,
        /// Previous index
        from: usize,
        /// New index
        to: usize,
    },
    /// An entry moved within a group or within the pool
    Reordered {
        /// Group or pool that was reordered
        location: Location,
        /// Previous index
        from: usize,
        /// New index
        to: usize,
    },
    /// An instance was dropped on the pool and destroyed
    Unassigned {
        /// Destroyed instance
        uid: InstanceUid,
        /// Group it was removed from
        from: GroupId,
    },
    /// A fresh instance was appended to a group
    Placed {
        /// Uid of the new instance
        uid: InstanceUid,
        /// Catalog stop it was placed from
        stop: StopId,
        /// Destination group
        into: GroupId,
        /// Where the template came from
        from: Location,
        /// Source instance removed under [`PlacementPolicy::Move`]
        removed_source: Option<InstanceUid>,
    },
    /// Source and target resolved but nothing needed to change
    Unchanged,
    /// The drag was abandoned without touching the board
    Cancelled {
        /// Why
        reason: CancelReason,
    },
}

impl DropOutcome {
    /// Convenience constructor for a cancelled outcome
    #[must_use]
    pub const fn cancelled(reason: CancelReason) -> Self {
        Self::Cancelled { reason }
    }

    /// Returns true if the board content changed
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        !matches!(self, Self::Unchanged | Self::Cancelled { .. })
    }

    /// Returns the cancel reason, if cancelled
    #[must_use]
    pub const fn cancel_reason(&self) -> Option<CancelReason> {
        match self {
            Self::Cancelled { reason } => Some(*reason),
            _ => None,
        }
    }

    /// Returns the uid of a newly placed instance
    #[must_use]
    pub const fn placed_uid(&self) -> Option<&InstanceUid> {
        match self {
            Self::Placed { uid, .. } => Some(uid),
            _ => None,
        }
    }
}

/// Moves the element at `from` to `to`, shifting the ones in between.
pub(crate) fn move_index<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}

impl Board {
    /// Applies the transition for a resolved drag. Never panics on stale
    /// input.
    pub(super) fn commit_drop(&mut self, source: &EntityRef, target: &EntityRef) -> DropOutcome {
        match source {
            EntityRef::Group(group) => self.drop_group(*group, target),
            EntityRef::Instance(_) | EntityRef::Stop(_) => self.drop_stop(source, target),
            EntityRef::Pool => DropOutcome::cancelled(CancelReason::NotDraggable),
        }
    }

    fn drop_group(&mut self, group: GroupId, target: &EntityRef) -> DropOutcome {
        let EntityRef::Group(target_group) = target else {
            return DropOutcome::cancelled(CancelReason::IncompatibleTarget);
        };
        let Some(from) = self.group_index(group) else {
            return DropOutcome::cancelled(CancelReason::StaleSource);
        };
        let Some(to) = self.group_index(*target_group) else {
            return DropOutcome::cancelled(CancelReason::StaleTarget);
        };
        if from == to {
            return DropOutcome::Unchanged;
        }
        move_index(&mut self.groups, from, to);
        DropOutcome::GroupsReordered { group, from, to }
    }

    fn drop_stop(&mut self, source: &EntityRef, target: &EntityRef) -> DropOutcome {
        let from = self.resolve_container(source);
        if !from.is_found() {
            return DropOutcome::cancelled(CancelReason::StaleSource);
        }
        let to = self.resolve_container(target);
        if !to.is_found() {
            return DropOutcome::cancelled(CancelReason::StaleTarget);
        }

        if from == to {
            return self.reorder_within(from, source, target);
        }
        match (from, to) {
            (Location::Group(group), Location::Pool) => self.unassign(group, source),
            (_, Location::Group(into)) => self.place(from, source, into),
            _ => DropOutcome::cancelled(CancelReason::IncompatibleTarget),
        }
    }

    fn reorder_within(
        &mut self,
        location: Location,
        source: &EntityRef,
        target: &EntityRef,
    ) -> DropOutcome {
        let indices = match location {
            Location::Group(id) => {
                let Some(gi) = self.group_index(id) else {
                    return DropOutcome::cancelled(CancelReason::StaleTarget);
                };
                let group = &self.groups[gi];
                let index_of = |entity: &EntityRef| match entity {
                    EntityRef::Instance(uid) => group.position_of(uid),
                    _ => None,
                };
                index_of(source).zip(index_of(target)).map(|(f, t)| (Some(gi), f, t))
            }
            Location::Pool => {
                let index_of = |entity: &EntityRef| match entity {
                    EntityRef::Stop(id) => self.pool_index(*id),
                    _ => None,
                };
                index_of(source).zip(index_of(target)).map(|(f, t)| (None, f, t))
            }
            Location::NotFound => return DropOutcome::cancelled(CancelReason::StaleSource),
        };

        // Dropping on the container itself (header or pool zone) has no index.
        let Some((group_index, from, to)) = indices else {
            return DropOutcome::Unchanged;
        };
        if from == to {
            return DropOutcome::Unchanged;
        }
        match group_index {
            Some(gi) => move_index(&mut self.groups[gi].stops, from, to),
            None => move_index(&mut self.pool, from, to),
        }
        DropOutcome::Reordered { location, from, to }
    }

    fn unassign(&mut self, group: GroupId, source: &EntityRef) -> DropOutcome {
        let EntityRef::Instance(uid) = source else {
            return DropOutcome::cancelled(CancelReason::IncompatibleTarget);
        };
        match self.take_instance(uid) {
            Some(instance) => DropOutcome::Unassigned {
                uid: instance.uid,
                from: group,
            },
            None => DropOutcome::cancelled(CancelReason::StaleSource),
        }
    }

    fn place(&mut self, from: Location, source: &EntityRef, into: GroupId) -> DropOutcome {
        let template = match source {
            EntityRef::Stop(id) => self.pool_index(*id).map(|i| self.pool[i].clone()),
            EntityRef::Instance(uid) => self.find_instance(uid).map(|i| i.stop.clone()),
            EntityRef::Group(_) | EntityRef::Pool => None,
        };
        let Some(stop) = template else {
            return DropOutcome::cancelled(CancelReason::StaleSource);
        };
        let Some(gi) = self.group_index(into) else {
            return DropOutcome::cancelled(CancelReason::StaleTarget);
        };

        let uid = self.allocate_uid();
        let stop_id = stop.id;
        self.groups[gi]
            .stops
            .push(StopInstance::new(uid.clone(), stop));

        let removed_source = match (self.placement, source, from) {
            (PlacementPolicy::Move, EntityRef::Instance(src), Location::Group(_)) => {
                self.take_instance(src).map(|i| i.uid)
            }
            _ => None,
        };

        DropOutcome::Placed {
            uid,
            stop: stop_id,
            into,
            from,
            removed_source,
        }
    }
}

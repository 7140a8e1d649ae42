//! Drag-and-drop payload model and drop target selection
//!
//! Pointer geometry lives outside the engine: the gesture driver hands over
//! candidate targets already ranked by its collision strategy (closest first).
//! This module turns that ranking into a single target deterministically and
//! lists the targets a keyboard driver may step through.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Location};
use crate::identity::InstanceUid;
use crate::models::{GroupId, Stop, StopId};

/// Reference to anything that can be dragged or dropped onto.
///
/// Serialized as `{"kind": "...", "id": ...}`; the pool has no id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EntityRef {
    /// A stop group (drag handle or drop zone)
    Group(GroupId),
    /// A placed stop inside a group
    Instance(InstanceUid),
    /// A catalog stop listed in the unassigned pool
    Stop(StopId),
    /// The unassigned pool drop zone
    Pool,
}

/// Kind discriminant of an [`EntityRef`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A stop group
    Group,
    /// A placed stop
    Instance,
    /// A catalog stop in the pool
    CatalogStop,
    /// The unassigned pool
    Pool,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group => write!(f, "group"),
            Self::Instance => write!(f, "instance"),
            Self::CatalogStop => write!(f, "catalog_stop"),
            Self::Pool => write!(f, "pool"),
        }
    }
}

impl EntityRef {
    /// Returns the kind discriminant
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Group(_) => EntityKind::Group,
            Self::Instance(_) => EntityKind::Instance,
            Self::Stop(_) => EntityKind::CatalogStop,
            Self::Pool => EntityKind::Pool,
        }
    }

    /// Returns true for placed or catalog stops
    #[must_use]
    pub const fn is_stop_like(&self) -> bool {
        matches!(self, Self::Instance(_) | Self::Stop(_))
    }

    /// Shorthand for an instance reference
    #[must_use]
    pub fn instance(uid: impl Into<String>) -> Self {
        Self::Instance(InstanceUid::new(uid))
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group(id) => write!(f, "group:{id}"),
            Self::Instance(uid) => write!(f, "instance:{uid}"),
            Self::Stop(id) => write!(f, "stop:{id}"),
            Self::Pool => write!(f, "pool"),
        }
    }
}

/// What the drag overlay shows while a drag is in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOverlay {
    /// Summary of a dragged group
    Group {
        /// Group id
        id: GroupId,
        /// Group name
        name: String,
        /// Group description
        description: String,
    },
    /// Copy of the dragged stop
    Stop(Stop),
}

/// The single in-flight drag.
///
/// Transient display state only; it never takes part in committed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDrag {
    /// Entity that was picked up
    pub entity: EntityRef,
    /// Snapshot for the overlay, taken at drag start
    pub overlay: DragOverlay,
}

/// Picks the drop target from candidates ranked closest-first.
///
/// Group drags take the first rendered group. Stop drags take the first
/// candidate that resolves to a location and is rendered. Candidates inside
/// hidden or collapsed groups are skipped, so a drop never lands somewhere
/// the user cannot see. Returns `None` when nothing qualifies.
#[must_use]
pub fn pick_drop_target(
    board: &Board,
    source: &EntityRef,
    candidates: &[EntityRef],
) -> Option<EntityRef> {
    match source {
        EntityRef::Group(_) => candidates
            .iter()
            .find(|c| matches!(c, EntityRef::Group(id) if board.is_group_rendered(*id)))
            .cloned(),
        stop if stop.is_stop_like() => candidates
            .iter()
            .find(|c| is_rendered_target(board, c))
            .cloned(),
        _ => None,
    }
}

/// Returns true if the entity is currently rendered as a drop target
#[must_use]
pub fn is_rendered_target(board: &Board, target: &EntityRef) -> bool {
    match target {
        EntityRef::Group(id) => board.is_group_rendered(*id),
        EntityRef::Instance(_) => match board.resolve_container(target) {
            Location::Group(id) => {
                board.is_group_rendered(id) && board.group(id).is_some_and(|g| g.is_expanded)
            }
            Location::Pool | Location::NotFound => false,
        },
        EntityRef::Stop(_) | EntityRef::Pool => board.resolve_container(target).is_found(),
    }
}

/// Lists drop targets in rendered order for a keyboard-driven drag.
///
/// Group drags step through the rendered groups. Stop drags step through
/// each rendered group header followed by its stops (when expanded), then
/// the pool zone followed by the pool stops.
#[must_use]
pub fn rendered_targets(board: &Board, source: &EntityRef) -> Vec<EntityRef> {
    let rendered = board.groups().iter().filter(|g| board.is_group_rendered(g.id));
    match source {
        EntityRef::Group(_) => rendered.map(|g| EntityRef::Group(g.id)).collect(),
        stop if stop.is_stop_like() => {
            let mut targets = Vec::new();
            for group in rendered {
                targets.push(EntityRef::Group(group.id));
                if group.is_expanded {
                    targets.extend(group.stops.iter().map(|s| EntityRef::Instance(s.uid.clone())));
                }
            }
            targets.push(EntityRef::Pool);
            targets.extend(board.pool().iter().map(|s| EntityRef::Stop(s.id)));
            targets
        }
        _ => Vec::new(),
    }
}

//! Serializable board commands
//!
//! Every gesture and mutator has a [`BoardEvent`] counterpart so a session
//! can be scripted or replayed. Events are tagged by `event` in snake case:
//!
//! ```json
//! {"event": "drag_end", "source": {"kind": "stop", "id": 2}, "target": {"kind": "group", "id": 1}}
//! ```

use serde::{Deserialize, Serialize};

use crate::board::{Board, DropOutcome};
use crate::drag_drop::EntityRef;
use crate::identity::InstanceUid;
use crate::models::GroupId;

/// A single inbound board command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BoardEvent {
    /// Pick up an entity
    DragStart {
        /// Entity being dragged
        entity: EntityRef,
    },
    /// Release a drag over an optional target
    DragEnd {
        /// Entity being dragged
        source: EntityRef,
        /// Target under the pointer
        #[serde(default)]
        target: Option<EntityRef>,
    },
    /// Release a drag over candidates ranked closest-first
    DragEndRanked {
        /// Entity being dragged
        source: EntityRef,
        /// Candidate targets, closest first
        #[serde(default)]
        candidates: Vec<EntityRef>,
    },
    /// Abandon the active drag
    DragCancel,
    /// Flip one group's expansion
    ToggleExpansion {
        /// Group to toggle
        group: GroupId,
    },
    /// Collapse every group
    CollapseAll,
    /// Expand every group
    ExpandAll,
    /// Delete a placed instance
    RemoveInstance {
        /// Instance to delete
        uid: InstanceUid,
    },
    /// Show or hide private groups
    SetVisibilityFilter {
        /// Whether private groups are rendered
        show_private: bool,
    },
}

impl BoardEvent {
    /// Short name of the event, matching its serialized tag
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DragStart { .. } => "drag_start",
            Self::DragEnd { .. } => "drag_end",
            Self::DragEndRanked { .. } => "drag_end_ranked",
            Self::DragCancel => "drag_cancel",
            Self::ToggleExpansion { .. } => "toggle_expansion",
            Self::CollapseAll => "collapse_all",
            Self::ExpandAll => "expand_all",
            Self::RemoveInstance { .. } => "remove_instance",
            Self::SetVisibilityFilter { .. } => "set_visibility_filter",
        }
    }
}

/// What applying an event did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum EventOutcome {
    /// A drag ended
    Drop {
        /// Drop result
        #[serde(flatten)]
        outcome: DropOutcome,
    },
    /// A command that reports whether it took effect
    Applied {
        /// False if the command referenced something absent or stale
        changed: bool,
    },
    /// A command with nothing to reject
    Done,
}

impl EventOutcome {
    /// Returns false if the event was ignored or its drop was cancelled or
    /// left the board unchanged
    #[must_use]
    pub const fn changed(&self) -> bool {
        match self {
            Self::Drop { outcome } => outcome.is_committed(),
            Self::Applied { changed } => *changed,
            Self::Done => true,
        }
    }
}

impl Board {
    /// Applies one event
    pub fn apply(&mut self, event: BoardEvent) -> EventOutcome {
        match event {
            BoardEvent::DragStart { entity } => EventOutcome::Applied {
                changed: self.drag_start(entity),
            },
            BoardEvent::DragEnd { source, target } => EventOutcome::Drop {
                outcome: self.drag_end(&source, target.as_ref()),
            },
            BoardEvent::DragEndRanked { source, candidates } => EventOutcome::Drop {
                outcome: self.drag_end_ranked(&source, &candidates),
            },
            BoardEvent::DragCancel => EventOutcome::Applied {
                changed: self.drag_cancel(),
            },
            BoardEvent::ToggleExpansion { group } => EventOutcome::Applied {
                changed: self.toggle_expansion(group),
            },
            BoardEvent::CollapseAll => {
                self.collapse_all();
                EventOutcome::Done
            }
            BoardEvent::ExpandAll => {
                self.expand_all();
                EventOutcome::Done
            }
            BoardEvent::RemoveInstance { uid } => EventOutcome::Applied {
                changed: self.remove_instance(&uid),
            },
            BoardEvent::SetVisibilityFilter { show_private } => {
                self.set_visibility_filter(show_private);
                EventOutcome::Done
            }
        }
    }
}

//! Keyboard-driven drags
//!
//! [`KeyboardDrag`] lets a user pick up an entity, step a cursor through the
//! rendered drop targets and confirm. It runs the same drag transaction as a
//! pointer gesture, so the outcome rules are identical.

use serde::{Deserialize, Serialize};

use crate::board::{Board, CancelReason, DropOutcome, Location};
use crate::drag_drop::{self, EntityRef};

/// Cursor movement over the rendered target list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Previous target
    Up,
    /// Next target
    Down,
    /// First target
    First,
    /// Last target
    Last,
}

impl Direction {
    /// Maps a key name to a direction.
    ///
    /// Accepts `ArrowUp`/`ArrowLeft`, `ArrowDown`/`ArrowRight`, `Home` and
    /// `End`, case-insensitively.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "arrowup" | "arrowleft" | "up" | "left" => Some(Self::Up),
            "arrowdown" | "arrowright" | "down" | "right" => Some(Self::Down),
            "home" => Some(Self::First),
            "end" => Some(Self::Last),
            _ => None,
        }
    }
}

/// State of a keyboard drag in progress
#[derive(Debug, Clone, Default)]
pub struct KeyboardDrag {
    source: Option<EntityRef>,
    targets: Vec<EntityRef>,
    cursor: Option<usize>,
}

impl KeyboardDrag {
    /// Creates an idle driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks up an entity and starts the drag on the board.
    ///
    /// The cursor starts on the entity's own slot. An instance hidden inside
    /// a collapsed group starts on that group's header instead, and with no
    /// rendered slot at all the cursor stays unset until the first step.
    /// Confirming right away leaves the board unchanged in every case.
    /// Returns false if the board rejected the drag start.
    pub fn pick(&mut self, board: &mut Board, entity: EntityRef) -> bool {
        if !board.drag_start(entity.clone()) {
            self.reset();
            return false;
        }
        self.targets = drag_drop::rendered_targets(board, &entity);
        self.cursor = self.home_slot(board, &entity);
        tracing::debug!(source = %entity, targets = self.targets.len(), "Keyboard drag picked up");
        self.source = Some(entity);
        true
    }

    /// Moves the cursor and returns the target under it
    pub fn step(&mut self, direction: Direction) -> Option<&EntityRef> {
        if self.source.is_none() || self.targets.is_empty() {
            return None;
        }
        let last = self.targets.len() - 1;
        let next = match (direction, self.cursor) {
            (Direction::First, _) | (Direction::Up | Direction::Down, None) => 0,
            (Direction::Last, _) => last,
            (Direction::Up, Some(cursor)) => cursor.saturating_sub(1),
            (Direction::Down, Some(cursor)) => (cursor + 1).min(last),
        };
        self.cursor = Some(next);
        self.current_target()
    }

    /// Target under the cursor, if a drag is active
    #[must_use]
    pub fn current_target(&self) -> Option<&EntityRef> {
        self.source.as_ref()?;
        self.targets.get(self.cursor?)
    }

    /// Entity being dragged, if any
    #[must_use]
    pub const fn source(&self) -> Option<&EntityRef> {
        self.source.as_ref()
    }

    /// Returns true while a drag is in progress
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.source.is_some()
    }

    /// Drops onto the target under the cursor.
    ///
    /// With the cursor still unset the drag is put back where it came from
    /// and the outcome is `Unchanged`.
    pub fn confirm(&mut self, board: &mut Board) -> DropOutcome {
        let Some(source) = self.source.take() else {
            return DropOutcome::cancelled(CancelReason::NoTarget);
        };
        let target = self.cursor.and_then(|i| self.targets.get(i)).cloned();
        self.reset();
        match target {
            Some(target) => board.drag_end(&source, Some(&target)),
            None => {
                board.drag_cancel();
                DropOutcome::Unchanged
            }
        }
    }

    /// Abandons the drag. Returns true if one was in progress.
    pub fn cancel(&mut self, board: &mut Board) -> bool {
        let was_active = self.source.is_some();
        self.reset();
        if was_active {
            board.drag_cancel();
        }
        was_active
    }

    fn home_slot(&self, board: &Board, entity: &EntityRef) -> Option<usize> {
        let position = |target: &EntityRef| self.targets.iter().position(|t| t == target);
        position(entity).or_else(|| match board.resolve_container(entity) {
            Location::Group(id) => position(&EntityRef::Group(id)),
            Location::Pool => position(&EntityRef::Pool),
            Location::NotFound => None,
        })
    }

    fn reset(&mut self) {
        self.source = None;
        self.targets.clear();
        self.cursor = None;
    }
}

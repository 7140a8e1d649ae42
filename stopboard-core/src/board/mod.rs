//! Board state
//!
//! The [`Board`] is the authoritative in-memory model: catalog, unassigned
//! pool, ordered groups, expansion flags, the visibility filter and the
//! single active-drag slot. All handlers run synchronously to completion and
//! publish a fresh [`BoardSnapshot`] afterwards.

mod policy;
mod resolver;
mod snapshot;

pub use policy::{CancelReason, DropOutcome, PlacementPolicy};
pub use resolver::Location;
pub use snapshot::BoardSnapshot;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::watch;

use crate::config::BoardSettings;
use crate::drag_drop::{self, ActiveDrag, DragOverlay, EntityRef};
use crate::error::{BoardError, BoardResult};
use crate::identity::{InstanceUid, RandomUids, UidAllocator};
use crate::models::{GroupId, GroupSeed, Stop, StopGroup, StopId, StopInstance};
use crate::seed::SeedData;
use crate::trace_operation;
use crate::tracing::span_names;

/// The drag-and-drop assignment board.
///
/// # Example
///
/// ```
/// use stopboard_core::board::Board;
/// use stopboard_core::drag_drop::EntityRef;
/// use stopboard_core::models::{GroupId, GroupSeed, Stop, StopId};
///
/// let mut board = Board::new();
/// board.load_catalog(vec![Stop::new(1, "Welcome"), Stop::new(2, "Library")]).unwrap();
/// board.load_groups(vec![GroupSeed::new(1, "Information").with_stops(&[1])]).unwrap();
///
/// let source = EntityRef::Stop(StopId(2));
/// board.drag_start(source.clone());
/// let outcome = board.drag_end(&source, Some(&EntityRef::Group(GroupId(1))));
///
/// assert!(outcome.is_committed());
/// assert_eq!(board.group(GroupId(1)).unwrap().stops.len(), 2);
/// // The pool is a catalog view: stop 2 is still listed.
/// assert_eq!(board.pool().len(), 2);
/// ```
#[derive(Debug)]
pub struct Board {
    catalog: HashMap<StopId, Stop>,
    pool: Vec<Stop>,
    groups: Vec<StopGroup>,
    show_private: bool,
    active: Option<ActiveDrag>,
    placement: PlacementPolicy,
    uids: Box<dyn UidAllocator>,
    catalog_loaded: bool,
    groups_loaded: bool,
    revision: u64,
    snapshots: watch::Sender<Arc<BoardSnapshot>>,
}

impl Board {
    /// Creates an empty board with random uids and copy placement
    #[must_use]
    pub fn new() -> Self {
        Self::with_allocator(Box::new(RandomUids))
    }

    /// Creates an empty board that draws uids from the given allocator
    #[must_use]
    pub fn with_allocator(uids: Box<dyn UidAllocator>) -> Self {
        let (snapshots, _) = watch::channel(Arc::new(BoardSnapshot::default()));
        Self {
            catalog: HashMap::new(),
            pool: Vec::new(),
            groups: Vec::new(),
            show_private: false,
            active: None,
            placement: PlacementPolicy::default(),
            uids,
            catalog_loaded: false,
            groups_loaded: false,
            revision: 0,
            snapshots,
        }
    }

    /// Creates an empty board configured from settings
    #[must_use]
    pub fn from_settings(settings: &BoardSettings) -> Self {
        let mut board = Self::with_allocator(settings.identity.allocator(&settings.uid_prefix));
        board.placement = settings.placement;
        board.show_private = settings.show_private;
        board.publish();
        board
    }

    /// Sets the placement policy
    #[must_use]
    pub fn with_placement(mut self, placement: PlacementPolicy) -> Self {
        self.placement = placement;
        self
    }

    // ========== Setup ==========

    /// Loads the catalog. The pool starts as the full catalog, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog was already loaded or contains
    /// duplicate stop ids. Nothing is changed on error.
    pub fn load_catalog(&mut self, stops: Vec<Stop>) -> BoardResult<()> {
        let _span = trace_operation!(span_names::BOARD_LOAD, item_count = stops.len()).entered();
        if self.catalog_loaded {
            return Err(BoardError::AlreadyLoaded("catalog"));
        }

        let mut catalog = HashMap::with_capacity(stops.len());
        for stop in &stops {
            if catalog.insert(stop.id, stop.clone()).is_some() {
                return Err(BoardError::DuplicateStopId(stop.id));
            }
        }

        self.catalog = catalog;
        self.pool = stops;
        self.catalog_loaded = true;
        tracing::debug!(stops = self.pool.len(), "Catalog loaded");
        self.commit();
        Ok(())
    }

    /// Loads the groups, creating one fresh instance per seeded stop id.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is not loaded yet, groups were already
    /// loaded, two seeds share an id, or a seed references an unknown stop.
    /// Nothing is changed on error.
    pub fn load_groups(&mut self, seeds: Vec<GroupSeed>) -> BoardResult<()> {
        let _span = trace_operation!(span_names::BOARD_LOAD, item_count = seeds.len()).entered();
        if !self.catalog_loaded {
            return Err(BoardError::CatalogNotLoaded);
        }
        if self.groups_loaded {
            return Err(BoardError::AlreadyLoaded("groups"));
        }

        let mut seen = HashSet::with_capacity(seeds.len());
        for seed in &seeds {
            if !seen.insert(seed.id) {
                return Err(BoardError::DuplicateGroupId(seed.id));
            }
            if let Some(stop) = seed.stop_ids.iter().find(|id| !self.catalog.contains_key(*id)) {
                return Err(BoardError::UnknownStop {
                    group: seed.id,
                    stop: *stop,
                });
            }
        }

        let mut groups = Vec::with_capacity(seeds.len());
        for seed in seeds {
            let visibility = seed.visibility();
            let mut stops = Vec::with_capacity(seed.stop_ids.len());
            for id in &seed.stop_ids {
                let stop = self.catalog[id].clone();
                stops.push(StopInstance::new(self.uids.next_uid(), stop));
            }
            groups.push(StopGroup {
                id: seed.id,
                name: seed.name,
                description: seed.description,
                visibility,
                stops,
                is_expanded: true,
            });
        }

        self.groups = groups;
        self.groups_loaded = true;
        tracing::debug!(groups = self.groups.len(), "Groups loaded");
        self.commit();
        Ok(())
    }

    /// Loads a whole seed: catalog first, then groups.
    ///
    /// # Errors
    ///
    /// Returns the first setup error from [`Board::load_catalog`] or
    /// [`Board::load_groups`].
    pub fn load_seed(&mut self, seed: SeedData) -> BoardResult<()> {
        self.load_catalog(seed.stops)?;
        self.load_groups(seed.groups)
    }

    // ========== Drag transactions ==========

    /// Starts a drag. Returns false (and stays idle) if the entity is not on
    /// the board.
    ///
    /// A drag start while another drag is active replaces the active one.
    pub fn drag_start(&mut self, entity: EntityRef) -> bool {
        let _span =
            trace_operation!(span_names::DRAG_START, entity = %entity, kind = %entity.kind())
                .entered();
        let Some(overlay) = self.overlay_for(&entity) else {
            tracing::debug!("Ignoring drag start for stale entity");
            return false;
        };
        if let Some(previous) = self.active.replace(ActiveDrag { entity, overlay }) {
            tracing::warn!(previous = %previous.entity, "Drag started while another was active; replacing it");
        }
        self.publish();
        true
    }

    /// Ends a drag with an optional target.
    ///
    /// Always clears the active slot. Without a target, or when either side
    /// is stale, the board content is left untouched.
    pub fn drag_end(&mut self, source: &EntityRef, target: Option<&EntityRef>) -> DropOutcome {
        let target_label = target.map_or_else(|| "none".to_string(), ToString::to_string);
        let _span =
            trace_operation!(span_names::DRAG_END, source = %source, target = %target_label)
                .entered();

        self.active = None;
        let outcome = match target {
            Some(target) => self.commit_drop(source, target),
            None => DropOutcome::cancelled(CancelReason::NoTarget),
        };

        match &outcome {
            DropOutcome::Cancelled { reason } => {
                tracing::debug!(reason = %reason, "Drag cancelled");
            }
            DropOutcome::Unchanged => tracing::debug!("Drop left the board unchanged"),
            committed => tracing::debug!(outcome = ?committed, "Drop committed"),
        }

        if outcome.is_committed() {
            self.commit();
        } else {
            self.publish();
        }
        outcome
    }

    /// Ends a drag using candidates ranked closest-first by the gesture
    /// driver. See [`drag_drop::pick_drop_target`].
    pub fn drag_end_ranked(&mut self, source: &EntityRef, candidates: &[EntityRef]) -> DropOutcome {
        let target = drag_drop::pick_drop_target(self, source, candidates);
        self.drag_end(source, target.as_ref())
    }

    /// Abandons the active drag. Returns true if one was active.
    pub fn drag_cancel(&mut self) -> bool {
        let was_active = self.active.take().is_some();
        if was_active {
            tracing::debug!("Drag cancelled externally");
            self.publish();
        }
        was_active
    }

    /// Returns the in-flight drag, if any
    #[must_use]
    pub const fn active_drag(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    fn overlay_for(&self, entity: &EntityRef) -> Option<DragOverlay> {
        match entity {
            EntityRef::Group(id) => self.group(*id).map(|g| DragOverlay::Group {
                id: g.id,
                name: g.name.clone(),
                description: g.description.clone(),
            }),
            EntityRef::Instance(uid) => self
                .find_instance(uid)
                .map(|i| DragOverlay::Stop(i.stop.clone())),
            EntityRef::Stop(id) => self
                .pool_index(*id)
                .map(|i| DragOverlay::Stop(self.pool[i].clone())),
            EntityRef::Pool => None,
        }
    }

    // ========== Commands ==========

    /// Flips one group's expansion flag. Returns false if the group is
    /// unknown.
    pub fn toggle_expansion(&mut self, id: GroupId) -> bool {
        let Some(group) = self.groups.iter_mut().find(|g| g.id == id) else {
            tracing::debug!(group_id = %id, "Toggle ignored for unknown group");
            return false;
        };
        group.is_expanded = !group.is_expanded;
        self.commit();
        true
    }

    /// Collapses every group
    pub fn collapse_all(&mut self) {
        self.set_all_expanded(false);
    }

    /// Expands every group
    pub fn expand_all(&mut self) {
        self.set_all_expanded(true);
    }

    fn set_all_expanded(&mut self, expanded: bool) {
        if self.groups.iter().all(|g| g.is_expanded == expanded) {
            return;
        }
        for group in &mut self.groups {
            group.is_expanded = expanded;
        }
        self.commit();
    }

    /// Removes a placed instance wherever it is. Never touches the pool.
    /// Returns false if the uid is not on the board.
    pub fn remove_instance(&mut self, uid: &InstanceUid) -> bool {
        if self.take_instance(uid).is_none() {
            tracing::debug!(instance_uid = %uid, "Remove ignored for unknown instance");
            return false;
        }
        self.commit();
        true
    }

    /// Sets whether private groups are rendered. Groups themselves are not
    /// modified.
    pub fn set_visibility_filter(&mut self, show_private: bool) {
        if self.show_private != show_private {
            self.show_private = show_private;
            self.publish();
        }
    }

    pub(crate) fn take_instance(&mut self, uid: &InstanceUid) -> Option<StopInstance> {
        let (gi, si) = self.locate_instance(uid)?;
        Some(self.groups[gi].stops.remove(si))
    }

    fn allocate_uid(&mut self) -> InstanceUid {
        let uid = self.uids.next_uid();
        debug_assert!(
            self.find_instance(&uid).is_none(),
            "allocator returned a uid that is still on the board: {uid}"
        );
        uid
    }

    // ========== Queries ==========

    /// Groups in board order, hidden ones included
    #[must_use]
    pub fn groups(&self) -> &[StopGroup] {
        &self.groups
    }

    /// Looks up a group by id
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&StopGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// The unassigned pool in display order
    #[must_use]
    pub fn pool(&self) -> &[Stop] {
        &self.pool
    }

    /// Looks up a catalog stop
    #[must_use]
    pub fn catalog_stop(&self, id: StopId) -> Option<&Stop> {
        self.catalog.get(&id)
    }

    /// Whether private groups are rendered
    #[must_use]
    pub const fn show_private(&self) -> bool {
        self.show_private
    }

    /// Active placement policy
    #[must_use]
    pub const fn placement(&self) -> PlacementPolicy {
        self.placement
    }

    /// Returns true if the group exists and passes the visibility filter
    #[must_use]
    pub fn is_group_rendered(&self, id: GroupId) -> bool {
        self.group(id)
            .is_some_and(|g| self.show_private || g.is_public())
    }

    /// Number of committed content changes
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Verifies the board invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a duplicate group id, a duplicate
    /// instance uid, or a catalog stop missing from the pool.
    pub fn check_invariants(&self) -> BoardResult<()> {
        let mut group_ids = HashSet::with_capacity(self.groups.len());
        let mut uids = HashSet::new();
        for group in &self.groups {
            if !group_ids.insert(group.id) {
                return Err(BoardError::DuplicateGroupId(group.id));
            }
            for instance in &group.stops {
                if !uids.insert(&instance.uid) {
                    return Err(BoardError::DuplicateInstanceUid(instance.uid.clone()));
                }
            }
        }
        if let Some(missing) = self
            .catalog
            .keys()
            .find(|id| self.pool_index(**id).is_none())
        {
            return Err(BoardError::MissingFromPool(*missing));
        }
        Ok(())
    }

    // ========== Snapshots ==========

    /// Returns the latest published snapshot
    #[must_use]
    pub fn snapshot(&self) -> Arc<BoardSnapshot> {
        self.snapshots.borrow().clone()
    }

    /// Subscribes to snapshots published after every change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<BoardSnapshot>> {
        self.snapshots.subscribe()
    }

    fn commit(&mut self) {
        self.revision += 1;
        debug_assert!(
            self.check_invariants().is_ok(),
            "board invariant violated: {:?}",
            self.check_invariants()
        );
        self.publish();
    }

    fn publish(&self) {
        self.snapshots.send_replace(Arc::new(BoardSnapshot {
            revision: self.revision,
            groups: self.groups.clone(),
            pool: self.pool.clone(),
            show_private: self.show_private,
            active: self.active.clone(),
        }));
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

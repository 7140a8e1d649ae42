//! Property-based tests for drop transitions

use proptest::prelude::*;
use stopboard_core::{
    CancelReason, DropOutcome, EntityRef, GroupId, InstanceUid, Location, PlacementPolicy, StopId,
};

use super::strategies::{content, layout_strategy, policy_strategy};

fn group_ids(board: &stopboard_core::Board) -> Vec<GroupId> {
    board.groups().iter().map(|g| g.id).collect()
}

fn uids(board: &stopboard_core::Board, group: usize) -> Vec<InstanceUid> {
    board.groups()[group].stops.iter().map(|s| s.uid.clone()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Dropping a group on another group yields a permutation of the group
    /// list with the dragged group at the target's old index.
    #[test]
    fn prop_group_reorder_is_permutation(
        layout in layout_strategy(),
        from in 0usize..8,
        to in 0usize..8,
    ) {
        let mut board = layout.build(PlacementPolicy::Copy);
        let before = group_ids(&board);
        let from = from % before.len();
        let to = to % before.len();

        let source = EntityRef::Group(before[from]);
        let outcome = board.drag_end(&source, Some(&EntityRef::Group(before[to])));

        let after = group_ids(&board);
        let mut sorted_before = before.clone();
        let mut sorted_after = after.clone();
        sorted_before.sort();
        sorted_after.sort();
        prop_assert_eq!(sorted_before, sorted_after);
        prop_assert_eq!(after[to], before[from]);

        if from == to {
            prop_assert_eq!(outcome, DropOutcome::Unchanged);
        } else {
            prop_assert_eq!(outcome, DropOutcome::GroupsReordered { group: before[from], from, to });
        }
    }

    /// Reordering inside a group keeps the same uids and moves the source to
    /// the target's index.
    #[test]
    fn prop_reorder_within_group_preserves_uids(
        layout in layout_strategy(),
        group in 0usize..8,
        from in 0usize..8,
        to in 0usize..8,
    ) {
        let mut board = layout.build(PlacementPolicy::Copy);
        let group = group % board.groups().len();
        let before = uids(&board, group);
        prop_assume!(!before.is_empty());
        let from = from % before.len();
        let to = to % before.len();

        board.drag_end(
            &EntityRef::Instance(before[from].clone()),
            Some(&EntityRef::Instance(before[to].clone())),
        );

        let after = uids(&board, group);
        let mut sorted_before = before.clone();
        let mut sorted_after = after.clone();
        sorted_before.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        sorted_after.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        prop_assert_eq!(sorted_before, sorted_after);
        prop_assert_eq!(&after[to], &before[from]);
    }

    /// Placing with the copy policy leaves the source group untouched and
    /// appends a fresh instance of the same stop to the destination.
    #[test]
    fn prop_copy_place_leaves_source_untouched(
        layout in layout_strategy(),
        from_group in 0usize..8,
        to_group in 0usize..8,
        index in 0usize..8,
    ) {
        let mut board = layout.build(PlacementPolicy::Copy);
        let count = board.groups().len();
        let from_group = from_group % count;
        let to_group = to_group % count;
        prop_assume!(from_group != to_group);
        let source_uids = uids(&board, from_group);
        prop_assume!(!source_uids.is_empty());

        let uid = source_uids[index % source_uids.len()].clone();
        let stop = board.find_instance(&uid).unwrap().stop.id;
        let source_before = board.groups()[from_group].clone();
        let dest_id = board.groups()[to_group].id;
        let dest_len = board.groups()[to_group].stops.len();

        let outcome = board.drag_end(&EntityRef::Instance(uid.clone()), Some(&EntityRef::Group(dest_id)));

        prop_assert_eq!(&board.groups()[from_group], &source_before);
        let dest = board.group(dest_id).unwrap();
        prop_assert_eq!(dest.stops.len(), dest_len + 1);
        let placed = dest.stops.last().unwrap();
        prop_assert_eq!(placed.stop.id, stop);
        prop_assert_ne!(&placed.uid, &uid);
        prop_assert_eq!(outcome.placed_uid(), Some(&placed.uid));
    }

    /// Placing with the move policy removes the source instance.
    #[test]
    fn prop_move_place_removes_source(
        layout in layout_strategy(),
        from_group in 0usize..8,
        to_group in 0usize..8,
    ) {
        let mut board = layout.build(PlacementPolicy::Move);
        let count = board.groups().len();
        let from_group = from_group % count;
        let to_group = to_group % count;
        prop_assume!(from_group != to_group);
        let source_uids = uids(&board, from_group);
        prop_assume!(!source_uids.is_empty());

        let uid = source_uids[0].clone();
        let dest_id = board.groups()[to_group].id;
        let total = board.snapshot().instance_count();

        let outcome = board.drag_end(&EntityRef::Instance(uid.clone()), Some(&EntityRef::Group(dest_id)));

        prop_assert!(board.find_instance(&uid).is_none());
        prop_assert_eq!(board.snapshot().instance_count(), total);
        let removed_source = match outcome {
            DropOutcome::Placed { removed_source, .. } => removed_source,
            other => return Err(TestCaseError::fail(format!("expected placement, got {other:?}"))),
        };
        prop_assert_eq!(removed_source, Some(uid));
    }

    /// Dropping a pool stop into a group never changes the pool, under
    /// either policy.
    #[test]
    fn prop_pool_stop_placement_keeps_pool(
        layout in layout_strategy(),
        policy in policy_strategy(),
        stop in 0usize..8,
        group in 0usize..8,
    ) {
        let mut board = layout.build(policy);
        let pool_before = board.pool().to_vec();
        let stop_id = pool_before[stop % pool_before.len()].id;
        let group_id = board.groups()[group % board.groups().len()].id;

        let outcome = board.drag_end(&EntityRef::Stop(stop_id), Some(&EntityRef::Group(group_id)));

        prop_assert!(outcome.is_committed());
        prop_assert_eq!(board.pool(), pool_before.as_slice());
        prop_assert_eq!(board.group(group_id).unwrap().stops.last().unwrap().stop.id, stop_id);
    }

    /// Dropping an instance on the pool destroys it and leaves the pool
    /// exactly as it was.
    #[test]
    fn prop_unassign_destroys_instance(
        layout in layout_strategy(),
        group in 0usize..8,
    ) {
        let mut board = layout.build(PlacementPolicy::Copy);
        let group = group % board.groups().len();
        let group_uids = uids(&board, group);
        prop_assume!(!group_uids.is_empty());
        let pool_before = board.pool().to_vec();
        let uid = group_uids[0].clone();

        let outcome = board.drag_end(&EntityRef::Instance(uid.clone()), Some(&EntityRef::Pool));

        prop_assert_eq!(
            outcome,
            DropOutcome::Unassigned { uid: uid.clone(), from: board.groups()[group].id }
        );
        prop_assert!(board.find_instance(&uid).is_none());
        prop_assert_eq!(board.pool(), pool_before.as_slice());
    }

    /// Stale sources or targets cancel the drop and change nothing.
    #[test]
    fn prop_stale_input_is_noop(
        layout in layout_strategy(),
        stop in 0usize..8,
    ) {
        let mut board = layout.build(PlacementPolicy::Copy);
        let before = content(&board.snapshot());
        let revision = board.revision();
        let stop_id = board.pool()[stop % board.pool().len()].id;
        let stale = EntityRef::instance("stale");

        let outcome = board.drag_end(&stale, Some(&EntityRef::Pool));
        prop_assert_eq!(outcome, DropOutcome::cancelled(CancelReason::StaleSource));

        let outcome = board.drag_end(&EntityRef::Stop(stop_id), Some(&stale));
        prop_assert_eq!(outcome, DropOutcome::cancelled(CancelReason::StaleTarget));

        let outcome = board.drag_end(&EntityRef::Stop(StopId(9_999)), Some(&EntityRef::Pool));
        prop_assert_eq!(outcome, DropOutcome::cancelled(CancelReason::StaleSource));

        let outcome = board.drag_end(&EntityRef::Group(GroupId(9_999)), Some(&EntityRef::Group(GroupId(1))));
        prop_assert_eq!(outcome, DropOutcome::cancelled(CancelReason::StaleSource));

        prop_assert_eq!(content(&board.snapshot()), before);
        prop_assert_eq!(board.revision(), revision);
        prop_assert_eq!(board.resolve_container(&stale), Location::NotFound);
    }
}

//! Property-based tests for board state invariants
//!
//! Random sequences of drags, toggles, removals and filter changes must keep
//! the board consistent: unique uids, unique group ids, and a pool that still
//! lists the whole catalog.

use std::collections::HashSet;

use proptest::prelude::*;
use stopboard_core::{EntityRef, GroupId};

use super::strategies::{content, layout_strategy, op_strategy, policy_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Instance uids stay unique across every group after any sequence.
    #[test]
    fn prop_uids_unique_after_any_sequence(
        layout in layout_strategy(),
        policy in policy_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut board = layout.build(policy);
        for op in &ops {
            op.apply(&mut board);
            prop_assert!(board.check_invariants().is_ok(), "after {:?}", op);
        }

        let mut seen = HashSet::new();
        for group in board.groups() {
            for instance in &group.stops {
                prop_assert!(seen.insert(instance.uid.clone()), "duplicate uid {}", instance.uid);
            }
        }
    }

    /// The pool lists every catalog stop exactly once, whatever happens to
    /// the groups.
    #[test]
    fn prop_pool_keeps_full_catalog(
        layout in layout_strategy(),
        policy in policy_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut board = layout.build(policy);
        let mut before: Vec<_> = board.pool().iter().map(|s| s.id).collect();
        before.sort();

        for op in &ops {
            op.apply(&mut board);
        }

        let mut after: Vec<_> = board.pool().iter().map(|s| s.id).collect();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// Collapsing everything twice is the same as collapsing once.
    #[test]
    fn prop_collapse_all_idempotent(
        layout in layout_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..10),
    ) {
        let mut board = layout.build(Default::default());
        for op in &ops {
            op.apply(&mut board);
        }

        board.collapse_all();
        let once = content(&board.snapshot());
        let revision = board.revision();
        board.collapse_all();

        prop_assert_eq!(content(&board.snapshot()), once);
        prop_assert_eq!(board.revision(), revision);
        prop_assert!(board.groups().iter().all(|g| !g.is_expanded));
    }

    /// Starting a drag or flipping the visibility filter never changes
    /// committed content.
    #[test]
    fn prop_display_state_does_not_touch_content(
        layout in layout_strategy(),
        show_private in any::<bool>(),
        group_index in 0usize..8,
    ) {
        let mut board = layout.build(Default::default());
        let before = content(&board.snapshot());

        let id = board.groups()[group_index % board.groups().len()].id;
        board.drag_start(EntityRef::Group(id));
        board.set_visibility_filter(show_private);
        prop_assert_eq!(content(&board.snapshot()), before.clone());

        board.drag_cancel();
        prop_assert_eq!(content(&board.snapshot()), before);
        prop_assert!(board.active_drag().is_none());
    }

    /// Toggling one group never changes any other group.
    #[test]
    fn prop_toggle_is_local(
        layout in layout_strategy(),
        group_index in 0usize..8,
    ) {
        let mut board = layout.build(Default::default());
        let target = board.groups()[group_index % board.groups().len()].id;
        let others: Vec<_> = board
            .groups()
            .iter()
            .filter(|g| g.id != target)
            .cloned()
            .collect();

        prop_assert!(board.toggle_expansion(target));

        let after: Vec<_> = board
            .groups()
            .iter()
            .filter(|g| g.id != target)
            .cloned()
            .collect();
        prop_assert_eq!(others, after);
        prop_assert!(!board.group(target).unwrap().is_expanded);
        prop_assert!(!board.toggle_expansion(GroupId(999)));
    }
}

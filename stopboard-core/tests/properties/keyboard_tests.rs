//! Property-based tests for keyboard-driven drags

use proptest::prelude::*;
use stopboard_core::{
    Direction, DropOutcome, EntityRef, KeyboardDrag, Location, PlacementPolicy, rendered_targets,
};

use super::strategies::{Pick, content, layout_strategy, pick_strategy, policy_strategy};

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::First),
        Just(Direction::Last),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Picking something up and confirming without moving changes nothing,
    /// even when the source sits in a collapsed or hidden group.
    #[test]
    fn prop_confirm_in_place_is_unchanged(
        layout in layout_strategy(),
        pick in pick_strategy(),
        show_private in any::<bool>(),
        collapse in any::<bool>(),
    ) {
        prop_assume!(!matches!(pick, Pick::Pool | Pick::StaleInstance));
        let mut board = layout.build(PlacementPolicy::Copy);
        board.set_visibility_filter(show_private);
        if collapse {
            board.collapse_all();
        }
        let entity = pick.resolve(&board);
        let before = content(&board.snapshot());

        let mut drag = KeyboardDrag::new();
        prop_assume!(drag.pick(&mut board, entity.clone()));
        if let Some(target) = drag.current_target() {
            let home = match board.resolve_container(&entity) {
                Location::Group(id) => Some(EntityRef::Group(id)),
                Location::Pool => Some(EntityRef::Pool),
                Location::NotFound => None,
            };
            prop_assert!(*target == entity || Some(target) == home.as_ref());
        }

        prop_assert_eq!(drag.confirm(&mut board), DropOutcome::Unchanged);
        prop_assert_eq!(content(&board.snapshot()), before);
        prop_assert!(board.active_drag().is_none());
    }

    /// The cursor always sits on a rendered target and any confirmed drop
    /// keeps the board consistent.
    #[test]
    fn prop_cursor_stays_on_rendered_targets(
        layout in layout_strategy(),
        policy in policy_strategy(),
        pick in pick_strategy(),
        steps in prop::collection::vec(direction_strategy(), 0..20),
    ) {
        let mut board = layout.build(policy);
        let entity = pick.resolve(&board);
        let mut drag = KeyboardDrag::new();
        prop_assume!(drag.pick(&mut board, entity.clone()));

        let targets = rendered_targets(&board, &entity);
        for step in steps {
            let current = drag.step(step).cloned();
            match current {
                Some(target) => prop_assert!(targets.contains(&target)),
                None => prop_assert!(targets.is_empty()),
            }
        }

        drag.confirm(&mut board);
        prop_assert!(!drag.is_active());
        prop_assert!(board.active_drag().is_none());
        prop_assert!(board.check_invariants().is_ok());
    }
}

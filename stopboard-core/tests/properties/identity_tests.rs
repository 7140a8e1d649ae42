//! Property-based tests for instance uid allocation

use std::collections::HashSet;

use proptest::prelude::*;
use stopboard_core::{IdentityStrategy, RandomUids, SequentialUids, UidAllocator};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Sequential allocators never repeat a uid.
    #[test]
    fn prop_sequential_uids_unique(
        prefix in "[a-z]{1,8}",
        start in 0u64..1_000_000,
        count in 1usize..200,
    ) {
        let mut uids = SequentialUids::starting_at(prefix.clone(), start);
        let mut seen = HashSet::new();
        for _ in 0..count {
            let uid = uids.next_uid();
            prop_assert!(uid.as_str().starts_with(&prefix));
            prop_assert!(seen.insert(uid));
        }
    }

    /// Random allocators never repeat a uid in practice.
    #[test]
    fn prop_random_uids_unique(count in 1usize..200) {
        let mut uids = RandomUids;
        let seen: HashSet<_> = (0..count).map(|_| uids.next_uid()).collect();
        prop_assert_eq!(seen.len(), count);
    }

    /// Every strategy builds an allocator that honors uniqueness.
    #[test]
    fn prop_strategy_allocators_unique(
        sequential in any::<bool>(),
        count in 1usize..100,
    ) {
        let strategy = if sequential { IdentityStrategy::Sequential } else { IdentityStrategy::Random };
        let mut uids = strategy.allocator("stop");
        let seen: HashSet<_> = (0..count).map(|_| uids.next_uid()).collect();
        prop_assert_eq!(seen.len(), count);
    }
}

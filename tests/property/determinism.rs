//! Property-based tests for governance hash determinism and sensitivity

use aigp::{
    compute_governance_hash, compute_leaf_hash, verify_full_tree, verify_published_tree,
    verify_resource_inclusion, GovernedResource, HashType,
};
use proptest::prelude::*;

fn resource_strategy() -> impl Strategy<Value = GovernedResource> {
    (
        prop::sample::select(vec![
            "policy", "prompt", "tool", "lineage", "context", "memory", "model",
        ]),
        "[a-z][a-z0-9._-]{0,15}",
        ".{0,64}",
    )
        .prop_map(|(resource_type, name, content)| {
            GovernedResource::new(resource_type, name, content).unwrap()
        })
}

fn resources_strategy() -> impl Strategy<Value = Vec<GovernedResource>> {
    prop::collection::vec(resource_strategy(), 1..12)
}

proptest! {
    #[test]
    fn root_is_independent_of_input_order(
        resources in resources_strategy(),
        seed in any::<u64>(),
    ) {
        let mut shuffled = resources.clone();
        // Deterministic rotation plus reversal covers distinct orders without a RNG crate.
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        if seed % 2 == 0 {
            shuffled.reverse();
        }

        let a = compute_governance_hash(&resources).unwrap();
        let b = compute_governance_hash(&shuffled).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn single_resource_root_equals_leaf(resource in resource_strategy()) {
        let result = compute_governance_hash(std::slice::from_ref(&resource)).unwrap();
        prop_assert_eq!(result.hash_type, HashType::Sha256);
        prop_assert!(result.tree.is_none());
        prop_assert_eq!(result.root, compute_leaf_hash(&resource));
    }

    #[test]
    fn merkle_results_publish_sorted_trees(resources in prop::collection::vec(resource_strategy(), 2..12)) {
        let result = compute_governance_hash(&resources).unwrap();
        prop_assert_eq!(result.hash_type, HashType::MerkleSha256);
        let tree = result.tree.unwrap();
        prop_assert_eq!(tree.leaf_count, resources.len());
        prop_assert!(tree.leaves.windows(2).all(|pair| pair[0].hash <= pair[1].hash));
        prop_assert!(verify_published_tree(&tree, result.root.as_str()).unwrap());
        for resource in &resources {
            prop_assert!(verify_resource_inclusion(resource, &tree));
        }
    }

    #[test]
    fn content_change_changes_root(
        resources in resources_strategy(),
        index in any::<prop::sample::Index>(),
        suffix in ".{1,8}",
    ) {
        let original = compute_governance_hash(&resources).unwrap();
        let i = index.index(resources.len());
        let target = &resources[i];

        let mut tampered = resources.clone();
        tampered[i] = GovernedResource::new(
            target.resource_type().as_str(),
            target.resource_name(),
            format!("{}{}", target.content(), suffix),
        )
        .unwrap();

        prop_assert!(!verify_full_tree(&tampered, original.root.as_str()).unwrap());
    }

    #[test]
    fn full_tree_verification_accepts_own_root(resources in resources_strategy()) {
        let result = compute_governance_hash(&resources).unwrap();
        prop_assert!(verify_full_tree(&resources, result.root.as_str()).unwrap());
    }
}

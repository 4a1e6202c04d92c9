//! Integration tests for verifying governance hashes

use aigp::{
    compute_governance_hash, verify_full_tree, verify_published_tree, verify_resource_inclusion,
    GovernanceEvent, GovernedResource, HashError, LeafHash, MerkleTree,
};

use crate::integration::test_utils::{example_resources, EXAMPLE_ROOT};

fn published_tree() -> MerkleTree {
    compute_governance_hash(&example_resources())
        .unwrap()
        .tree
        .unwrap()
}

#[test]
fn test_each_resource_is_included() {
    let tree = published_tree();
    for resource in example_resources() {
        assert!(verify_resource_inclusion(&resource, &tree));
    }
}

#[test]
fn test_modified_resource_is_not_included() {
    let tree = published_tree();
    let modified =
        GovernedResource::new("policy", "policy.refund-limits", "Refund max: $9000").unwrap();
    assert!(!verify_resource_inclusion(&modified, &tree));
}

#[test]
fn test_same_content_under_other_type_is_not_included() {
    let tree = published_tree();
    let retyped = GovernedResource::new("context", "prompt.cs-v3", "You are helpful").unwrap();
    assert!(!verify_resource_inclusion(&retyped, &tree));
}

#[test]
fn test_full_tree_verification() {
    let resources = example_resources();
    assert!(verify_full_tree(&resources, EXAMPLE_ROOT).unwrap());
    assert!(!verify_full_tree(&resources, &"0".repeat(64)).unwrap());
    assert!(!verify_full_tree(&resources, "not-a-hash").unwrap());

    let mut reversed = resources.clone();
    reversed.reverse();
    assert!(verify_full_tree(&reversed, EXAMPLE_ROOT).unwrap());
}

#[test]
fn test_full_tree_verification_of_empty_set_is_error() {
    assert_eq!(
        verify_full_tree(&[], EXAMPLE_ROOT).unwrap_err(),
        HashError::EmptyResources
    );
}

#[test]
fn test_published_tree_rebuilds_root() {
    let tree = published_tree();
    assert!(verify_published_tree(&tree, EXAMPLE_ROOT).unwrap());
    assert!(!verify_published_tree(&tree, &"f".repeat(64)).unwrap());
}

#[test]
fn test_published_tree_with_tampered_leaf_fails() {
    let mut tree = published_tree();
    // Keep the list sorted so only the root comparison can fail.
    tree.leaves[2].hash = LeafHash::parse(&"f".repeat(64)).unwrap();
    assert!(!verify_published_tree(&tree, EXAMPLE_ROOT).unwrap());
}

#[test]
fn test_malformed_published_trees_are_rejected() {
    let mut unsorted = published_tree();
    unsorted.leaves.swap(0, 1);
    assert!(matches!(
        verify_published_tree(&unsorted, EXAMPLE_ROOT),
        Err(HashError::MalformedTree(_))
    ));

    let mut miscounted = published_tree();
    miscounted.leaf_count = 4;
    assert!(matches!(
        verify_published_tree(&miscounted, EXAMPLE_ROOT),
        Err(HashError::MalformedTree(_))
    ));
}

#[test]
fn test_published_tree_from_json() {
    let json = serde_json::to_string(&published_tree()).unwrap();
    let parsed: MerkleTree = serde_json::from_str(&json).unwrap();
    assert!(verify_published_tree(&parsed, EXAMPLE_ROOT).unwrap());

    let bad_hash = json.replacen("41f7515202f3", "41F7515202F3", 1);
    assert!(serde_json::from_str::<MerkleTree>(&bad_hash).is_err());
}

#[test]
fn test_event_carries_and_verifies_governance() {
    let resources = example_resources();
    let event = GovernanceEvent::new(
        "GOVERNANCE_PROOF",
        "governance-proof",
        "agent.support",
        "trace-123",
    )
    .with_governance(compute_governance_hash(&resources).unwrap());

    assert_eq!(event.governance_hash, EXAMPLE_ROOT);
    assert!(event.verify_governance(&resources).unwrap());

    let json: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
    assert_eq!(json["hash_type"], "merkle-sha256");
    assert_eq!(json["governance_merkle_tree"]["leaf_count"], 3);

    let tampered = vec![
        resources[0].clone(),
        resources[1].clone(),
        GovernedResource::new("tool", "tool.order-lookup", "{}").unwrap(),
    ];
    assert!(!event.verify_governance(&tampered).unwrap());
}

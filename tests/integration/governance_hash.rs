//! Integration tests for governance hash computation

use aigp::tree::hasher::{combine, sha256_hex};
use aigp::{
    compute_governance_hash, compute_leaf_hash, GovernedResource, HashError, HashMode, HashType,
};

use crate::integration::test_utils::{
    example_resources, EXAMPLE_ROOT, POLICY_LEAF, PROMPT_LEAF, TOOL_LEAF,
};

#[test]
fn test_example_resources_produce_known_root() {
    let result = compute_governance_hash(&example_resources()).unwrap();
    assert_eq!(result.hash_type, HashType::MerkleSha256);
    assert_eq!(result.root.as_str(), EXAMPLE_ROOT);

    let tree = result.tree.unwrap();
    assert_eq!(tree.leaf_count, 3);
    let hashes: Vec<&str> = tree.leaves.iter().map(|l| l.hash.as_str()).collect();
    assert_eq!(hashes, vec![PROMPT_LEAF, TOOL_LEAF, POLICY_LEAF]);
    assert_eq!(tree.leaves[0].resource_name, "prompt.cs-v3");
    assert_eq!(tree.leaves[2].resource_type.as_str(), "policy");
}

#[test]
fn test_odd_leaf_is_promoted_not_duplicated() {
    let result = compute_governance_hash(&example_resources()).unwrap();
    let pair = sha256_hex(&format!("{}{}", PROMPT_LEAF, TOOL_LEAF));
    let expected = sha256_hex(&format!("{}{}", pair, POLICY_LEAF));
    assert_eq!(result.root.as_str(), expected);

    let duplicated = sha256_hex(&format!(
        "{}{}",
        pair,
        sha256_hex(&format!("{}{}", POLICY_LEAF, POLICY_LEAF))
    ));
    assert_ne!(result.root.as_str(), duplicated);
}

#[test]
fn test_every_input_order_gives_same_root() {
    let resources = example_resources();
    let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
    for order in orders {
        let permuted: Vec<GovernedResource> =
            order.iter().map(|&i| resources[i].clone()).collect();
        let result = compute_governance_hash(&permuted).unwrap();
        assert_eq!(result.root.as_str(), EXAMPLE_ROOT, "order {:?}", order);
    }
}

#[test]
fn test_single_resource_is_flat_leaf_hash() {
    let resource = GovernedResource::new("policy", "policy.test", "hello").unwrap();
    let result = compute_governance_hash(std::slice::from_ref(&resource)).unwrap();
    assert_eq!(result.hash_type, HashType::Sha256);
    assert!(result.tree.is_none());
    assert!(!result.is_merkle());
    assert_eq!(result.root, compute_leaf_hash(&resource));
}

#[test]
fn test_two_resources_root_is_sorted_pair() {
    let a = GovernedResource::new("policy", "policy.a", "A").unwrap();
    let b = GovernedResource::new("tool", "tool.b", "B").unwrap();
    let (la, lb) = (compute_leaf_hash(&a), compute_leaf_hash(&b));
    let (lo, hi) = if la < lb { (la, lb) } else { (lb, la) };

    let result = compute_governance_hash(&[b, a]).unwrap();
    assert_eq!(result.root, combine(&lo, &hi));
    assert_eq!(
        result.root.as_str(),
        "cd3d84966ebe25ff526a6174a9ed8d2972fefa7a06ccaf3a2688d4d66f0aa3dc"
    );
}

#[test]
fn test_empty_resources_is_error() {
    assert_eq!(
        compute_governance_hash(&[]).unwrap_err(),
        HashError::EmptyResources
    );
}

#[test]
fn test_content_tamper_changes_root() {
    let mut resources = example_resources();
    resources[0] =
        GovernedResource::new("policy", "policy.refund-limits", "Refund max: $5000").unwrap();
    let result = compute_governance_hash(&resources).unwrap();
    assert_ne!(result.root.as_str(), EXAMPLE_ROOT);
}

#[test]
fn test_rename_changes_root() {
    let mut resources = example_resources();
    resources[2] =
        GovernedResource::new("tool", "tool.order-search", r#"{"name":"order-lookup"}"#).unwrap();
    let result = compute_governance_hash(&resources).unwrap();
    assert_ne!(result.root.as_str(), EXAMPLE_ROOT);
}

#[test]
fn test_resource_types_are_domain_separated() {
    let types = [
        "policy", "prompt", "tool", "lineage", "context", "memory", "model",
    ];
    let mut leaves: Vec<String> = types
        .iter()
        .map(|t| {
            let resource = GovernedResource::new(t, "shared.name", "same content").unwrap();
            compute_leaf_hash(&resource).into_string()
        })
        .collect();
    leaves.sort();
    leaves.dedup();
    assert_eq!(leaves.len(), types.len());
}

#[test]
fn test_custom_resource_type_is_accepted() {
    let resource = GovernedResource::new("data-source", "ds.orders", "rows").unwrap();
    assert!(!resource.resource_type().is_standard());
    assert_eq!(
        compute_leaf_hash(&resource).as_str(),
        sha256_hex("data-source:ds.orders:rows")
    );
}

#[test]
fn test_invalid_resource_type_and_name_rejected() {
    assert!(matches!(
        GovernedResource::new("Policy", "p", "x"),
        Err(HashError::InvalidResourceType(_))
    ));
    assert!(matches!(
        GovernedResource::new("policy", "bad:name", "x"),
        Err(HashError::InvalidResourceName(_))
    ));
}

#[test]
fn test_pointer_leaf_covers_reference_only() {
    let pointer =
        GovernedResource::pointer("prompt", "prompt.large", "s3://bucket/prompt-v3.txt").unwrap();
    let leaf = compute_leaf_hash(&pointer);
    assert_eq!(
        leaf.as_str(),
        "90e5097947ad3c70f34092a8a9db3d7246ac4b2cfecdd948285ade86ee1d34db"
    );

    let mut resources = example_resources();
    resources.push(pointer);
    let tree = compute_governance_hash(&resources).unwrap().tree.unwrap();
    let published = tree.leaves.iter().find(|l| l.hash == leaf).unwrap();
    assert_eq!(published.hash_mode, HashMode::Pointer);
    assert_eq!(
        published.content_ref.as_deref(),
        Some("s3://bucket/prompt-v3.txt")
    );
}

#[test]
fn test_published_tree_json_shape() {
    let tree = compute_governance_hash(&example_resources())
        .unwrap()
        .tree
        .unwrap();
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["algorithm"], "sha256");
    assert_eq!(json["leaf_count"], 3);
    assert_eq!(json["leaves"][0]["hash"], PROMPT_LEAF);
    assert!(json["leaves"][0].get("hash_mode").is_none());
    assert!(json["leaves"][0].get("content_ref").is_none());
}

#[test]
fn test_content_leaf_publishes_informational_content_ref() {
    let resource: GovernedResource = serde_json::from_str(
        r#"{"resource_type": "policy", "resource_name": "policy.refund-limits",
            "content": "Refund max: $500", "content_ref": "s3://bucket/policy.txt"}"#,
    )
    .unwrap();
    assert_eq!(resource.hash_mode(), HashMode::Content);
    assert_eq!(resource.content_ref(), Some("s3://bucket/policy.txt"));
    assert_eq!(compute_leaf_hash(&resource).as_str(), POLICY_LEAF);

    let mut resources = example_resources();
    resources[0] = resource;
    let result = compute_governance_hash(&resources).unwrap();
    assert_eq!(result.root.as_str(), EXAMPLE_ROOT);

    let json = serde_json::to_value(result.tree.unwrap()).unwrap();
    let leaf = &json["leaves"][2];
    assert_eq!(leaf["hash"], POLICY_LEAF);
    assert_eq!(leaf["content_ref"], "s3://bucket/policy.txt");
    assert!(leaf.get("hash_mode").is_none());
}

//! Shared fixtures for integration tests

use aigp::GovernedResource;

/// The policy, prompt and tool resources used throughout the integration tests.
pub fn example_resources() -> Vec<GovernedResource> {
    vec![
        GovernedResource::new("policy", "policy.refund-limits", "Refund max: $500").unwrap(),
        GovernedResource::new("prompt", "prompt.cs-v3", "You are helpful").unwrap(),
        GovernedResource::new("tool", "tool.order-lookup", r#"{"name":"order-lookup"}"#).unwrap(),
    ]
}

/// Root of the Merkle tree over [`example_resources`].
pub const EXAMPLE_ROOT: &str = "0dfb311e78240eedc3e400cd869d7912572ff8e20fe7f399bdb9a2e5d470c0d6";

pub const POLICY_LEAF: &str = "e5065e8a8c2d0d3b43f8e47ee92f9a55b4ae5b8838f2372fcde080d249836146";
pub const PROMPT_LEAF: &str = "41f7515202f3daadba19a95b7f181bd6eaffcd2258040508b776cf3541c72fbe";
pub const TOOL_LEAF: &str = "b1efc533b37139746a6ae0df6d348148a0a94e87c44eb24e0ad9df70f4702f02";

//! AIGP: Governance Hashing for AI Governance Proof Events
//!
//! Computes the `governance_hash` carried by AIGP events. One governed
//! resource yields a flat SHA-256 leaf hash; two or more yield the root of a
//! Merkle tree over their domain-separated leaf hashes, together with the
//! published tree that lets a verifier check a single resource without seeing
//! the others.

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod resource;
pub mod tree;
pub mod types;

pub use error::{ApiError, HashError};
pub use event::GovernanceEvent;
pub use resource::{GovernedResource, HashMode, ResourceType};
pub use tree::{
    compute_flat_hash, compute_governance_hash, compute_leaf_hash, compute_merkle_root,
    verify_full_tree, verify_published_tree, verify_resource_inclusion, GovernanceHash,
    MerkleLeaf, MerkleTree,
};
pub use types::{HashAlgorithm, HashType, LeafHash};

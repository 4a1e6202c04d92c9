//! Governance Merkle Tree
//!
//! Hashes a set of governed resources into a single governance hash. Each
//! resource becomes a domain-separated leaf; leaves are sorted by hash and
//! reduced pairwise to a root, with odd nodes promoted rather than duplicated.

pub mod builder;
pub mod hasher;
pub mod node;
pub mod verify;

pub use builder::{compute_governance_hash, compute_merkle_root};
pub use hasher::{compute_flat_hash, compute_leaf_hash};
pub use node::{GovernanceHash, MerkleLeaf, MerkleTree};
pub use verify::{verify_full_tree, verify_published_tree, verify_resource_inclusion};

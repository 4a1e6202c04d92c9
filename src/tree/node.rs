//! Published tree structures: leaves, the Merkle tree and the hashing result.

use crate::error::HashError;
use crate::resource::{HashMode, ResourceType};
use crate::types::{HashAlgorithm, HashType, LeafHash};
use serde::{Deserialize, Serialize};

/// One leaf of a published governance Merkle tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleLeaf {
    pub resource_type: ResourceType,
    pub resource_name: String,
    pub hash: LeafHash,
    /// Present only for pointer-mode leaves.
    #[serde(default, skip_serializing_if = "HashMode::is_content")]
    pub hash_mode: HashMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_ref: Option<String>,
}

/// The `governance_merkle_tree` object embedded in AIGP events.
///
/// Leaves are sorted ascending by hash. The root is not stored here; it is
/// published separately as the event's `governance_hash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleTree {
    pub algorithm: HashAlgorithm,
    pub leaf_count: usize,
    pub leaves: Vec<MerkleLeaf>,
}

impl MerkleTree {
    /// Check the structural invariants of a published tree
    ///
    /// - algorithm is sha256
    /// - leaf_count matches the leaf list and is at least 2
    /// - leaves are sorted ascending by hash
    pub fn validate(&self) -> Result<(), HashError> {
        if self.algorithm != HashAlgorithm::Sha256 {
            return Err(HashError::MalformedTree(format!(
                "algorithm must be sha256, got {}",
                self.algorithm
            )));
        }
        if self.leaf_count != self.leaves.len() {
            return Err(HashError::MalformedTree(format!(
                "leaf_count is {} but {} leaves are listed",
                self.leaf_count,
                self.leaves.len()
            )));
        }
        if self.leaf_count < 2 {
            return Err(HashError::MalformedTree(format!(
                "a Merkle tree needs at least 2 leaves, got {}",
                self.leaf_count
            )));
        }
        if let Some(pos) = self
            .leaves
            .windows(2)
            .position(|pair| pair[0].hash > pair[1].hash)
        {
            return Err(HashError::MalformedTree(format!(
                "leaves are not sorted by hash at index {}",
                pos + 1
            )));
        }
        Ok(())
    }

    /// Leaf hashes in published order.
    pub fn leaf_hashes(&self) -> Vec<LeafHash> {
        self.leaves.iter().map(|leaf| leaf.hash.clone()).collect()
    }

    /// Find a leaf by type, name and hash.
    pub fn find_leaf(
        &self,
        resource_type: &ResourceType,
        resource_name: &str,
        hash: &LeafHash,
    ) -> Option<&MerkleLeaf> {
        self.leaves.iter().find(|leaf| {
            leaf.hash == *hash
                && leaf.resource_type == *resource_type
                && leaf.resource_name == resource_name
        })
    }
}

/// Result of hashing a set of governed resources.
///
/// `root` goes into the event's `governance_hash`, `hash_type` into
/// `hash_type`, and `tree` (when present) into `governance_merkle_tree`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovernanceHash {
    pub root: LeafHash,
    pub tree: Option<MerkleTree>,
    pub hash_type: HashType,
}

impl GovernanceHash {
    pub fn is_merkle(&self) -> bool {
        self.hash_type == HashType::MerkleSha256
    }
}

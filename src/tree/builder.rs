//! Governance hash construction over a set of governed resources

use crate::error::HashError;
use crate::resource::GovernedResource;
use crate::tree::hasher;
use crate::tree::node::{GovernanceHash, MerkleLeaf, MerkleTree};
use crate::types::{HashAlgorithm, HashType, LeafHash};
use tracing::{debug, instrument, trace};

/// Compute the governance hash for a set of governed resources
///
/// 1. Hash every resource into a leaf.
/// 2. Sort leaves ascending by hash; input order never affects the root.
/// 3. One leaf: the root is that leaf hash, `hash_type` is `sha256` and no
///    tree is returned.
/// 4. Two or more leaves: reduce pairwise to a Merkle root
///    (see [`compute_merkle_root`]), `hash_type` is `merkle-sha256` and the
///    sorted leaf list is returned as the published tree.
#[instrument(skip(resources), fields(resource_count = resources.len()))]
pub fn compute_governance_hash(
    resources: &[GovernedResource],
) -> Result<GovernanceHash, HashError> {
    if resources.is_empty() {
        return Err(HashError::EmptyResources);
    }

    let mut leaves: Vec<MerkleLeaf> = resources
        .iter()
        .map(|resource| MerkleLeaf {
            resource_type: resource.resource_type().clone(),
            resource_name: resource.resource_name().to_string(),
            hash: hasher::compute_leaf_hash(resource),
            hash_mode: resource.hash_mode(),
            content_ref: resource.content_ref().map(str::to_string),
        })
        .collect();

    // Stable sort keeps identical leaves in input order; they are
    // indistinguishable in the output anyway.
    leaves.sort_by(|a, b| a.hash.cmp(&b.hash));

    if leaves.len() == 1 {
        let root = leaves.remove(0).hash;
        debug!(root = %root, "Single resource, using flat leaf hash");
        return Ok(GovernanceHash {
            root,
            tree: None,
            hash_type: HashType::Sha256,
        });
    }

    let sorted_hashes: Vec<LeafHash> = leaves.iter().map(|leaf| leaf.hash.clone()).collect();
    let root = compute_merkle_root(&sorted_hashes)?;
    debug!(root = %root, leaf_count = leaves.len(), "Computed Merkle governance hash");

    Ok(GovernanceHash {
        root,
        tree: Some(MerkleTree {
            algorithm: HashAlgorithm::Sha256,
            leaf_count: leaves.len(),
            leaves,
        }),
        hash_type: HashType::MerkleSha256,
    })
}

/// Reduce sorted leaf hashes to a Merkle root
///
/// Each level pairs adjacent nodes left to right with [`hasher::combine`].
/// A trailing unpaired node is promoted to the next level unchanged, never
/// paired with a copy of itself, so a tree of N leaves cannot share a root
/// with a tree of N+1 leaves ending in a duplicate. Nodes are not re-sorted
/// after the leaf level.
pub fn compute_merkle_root(sorted_hashes: &[LeafHash]) -> Result<LeafHash, HashError> {
    let mut level: Vec<LeafHash> = sorted_hashes.to_vec();
    if level.is_empty() {
        return Err(HashError::EmptyResources);
    }

    let mut depth = 0usize;
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        let mut pairs = level.chunks_exact(2);
        for pair in pairs.by_ref() {
            next.push(hasher::combine(&pair[0], &pair[1]));
        }
        if let [promoted] = pairs.remainder() {
            trace!(depth, node = %promoted, "Promoting odd node");
            next.push(promoted.clone());
        }
        trace!(depth, width = next.len(), "Reduced tree level");
        level = next;
        depth += 1;
    }

    level.pop().ok_or(HashError::EmptyResources)
}

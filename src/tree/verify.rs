//! Verification against a previously published governance hash.
//!
//! Two strategies are supported: leaf-list membership for a single resource,
//! and whole-tree reconstruction. Sibling-path inclusion proofs are not
//! defined.

use crate::error::HashError;
use crate::resource::GovernedResource;
use crate::tree::builder::{compute_governance_hash, compute_merkle_root};
use crate::tree::hasher::compute_leaf_hash;
use crate::tree::node::MerkleTree;
use tracing::{debug, instrument};

/// Check that `resource` appears in a published tree's leaf list
///
/// Matches on resource type, resource name and leaf hash. This proves
/// membership in the list only; it does not authenticate the root.
pub fn verify_resource_inclusion(resource: &GovernedResource, published: &MerkleTree) -> bool {
    let hash = compute_leaf_hash(resource);
    let found = published
        .find_leaf(resource.resource_type(), resource.resource_name(), &hash)
        .is_some();
    debug!(
        resource_type = %resource.resource_type(),
        resource_name = resource.resource_name(),
        leaf = %hash,
        found,
        "Checked leaf inclusion"
    );
    found
}

/// Recompute the governance hash over `resources` and compare with `claimed_root`
///
/// Any change to any resource's type, name or content changes its leaf and,
/// through it, the root.
#[instrument(skip(resources, claimed_root), fields(resource_count = resources.len()))]
pub fn verify_full_tree(
    resources: &[GovernedResource],
    claimed_root: &str,
) -> Result<bool, HashError> {
    let computed = compute_governance_hash(resources)?;
    let matches = computed.root == claimed_root;
    debug!(computed = %computed.root, matches, "Full tree verification");
    Ok(matches)
}

/// Rebuild the root from a published tree's leaf hashes and compare with `claimed_root`
///
/// The tree must be well formed (see [`MerkleTree::validate`]). Confirms the
/// published leaf list and root agree without access to the raw content.
pub fn verify_published_tree(published: &MerkleTree, claimed_root: &str) -> Result<bool, HashError> {
    published.validate()?;
    let root = compute_merkle_root(&published.leaf_hashes())?;
    let matches = root == claimed_root;
    debug!(computed = %root, matches, leaf_count = published.leaf_count, "Published tree verification");
    Ok(matches)
}

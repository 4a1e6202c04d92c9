//! Hash computation for governed resources using SHA-256

use crate::resource::GovernedResource;
use crate::types::{HashAlgorithm, LeafHash};
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Separator between the domain tags and the payload.
const DOMAIN_SEPARATOR: &[u8] = b":";

/// Compute the leaf hash for one governed resource
///
/// LeafHash = SHA-256(resource_type || ":" || resource_name || ":" || hashable)
///
/// The type and name act as a domain separator: identical content governed
/// under a different type or name hashes differently. No escaping or length
/// prefixing is applied; type and name are colon-free by construction.
pub fn compute_leaf_hash(resource: &GovernedResource) -> LeafHash {
    let mut hasher = Sha256::new();
    hasher.update(resource.resource_type().as_str().as_bytes());
    hasher.update(DOMAIN_SEPARATOR);
    hasher.update(resource.resource_name().as_bytes());
    hasher.update(DOMAIN_SEPARATOR);
    hasher.update(resource.hashable().as_bytes());
    LeafHash::from_digest(&hasher.finalize())
}

/// Compute a parent node from two child nodes
///
/// Parent = SHA-256(left_hex || right_hex)
///
/// Children are concatenated as hex text, not decoded to bytes.
pub fn combine(left: &LeafHash, right: &LeafHash) -> LeafHash {
    let mut hasher = Sha256::new();
    hasher.update(left.as_str().as_bytes());
    hasher.update(right.as_str().as_bytes());
    LeafHash::from_digest(&hasher.finalize())
}

/// Compute a flat (pre-Merkle) governance hash of `content`
///
/// Hashes the UTF-8 bytes with no normalization and returns lowercase hex.
pub fn compute_flat_hash(content: &str, algorithm: HashAlgorithm) -> String {
    let bytes = content.as_bytes();
    match algorithm {
        HashAlgorithm::Sha256 => hex::encode(Sha256::digest(bytes)),
        HashAlgorithm::Sha384 => hex::encode(Sha384::digest(bytes)),
        HashAlgorithm::Sha512 => hex::encode(Sha512::digest(bytes)),
    }
}

/// SHA-256 of arbitrary text, as lowercase hex
pub fn sha256_hex(data: &str) -> String {
    compute_flat_hash(data, HashAlgorithm::Sha256)
}

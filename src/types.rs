//! Core value types shared across the hasher, verifier and event envelope.

use crate::error::HashError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of a SHA-256 digest rendered as lowercase hex.
pub const SHA256_HEX_LEN: usize = 64;

/// A SHA-256 digest rendered as exactly 64 lowercase hex characters.
///
/// Ordering is plain string ordering, which for fixed-width lowercase hex is
/// the same as comparing the underlying digest bytes. Leaves are sorted with
/// this ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LeafHash(String);

impl LeafHash {
    /// Parse a published hash, rejecting anything but 64 lowercase hex characters.
    pub fn parse(value: &str) -> Result<Self, HashError> {
        if is_sha256_hex(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(HashError::InvalidHash(value.to_string()))
        }
    }

    /// Wrap a raw 32-byte SHA-256 digest.
    pub(crate) fn from_digest(digest: &[u8]) -> Self {
        Self(hex::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for LeafHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LeafHash {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LeafHash {
    type Error = HashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_sha256_hex(&value) {
            Ok(Self(value))
        } else {
            Err(HashError::InvalidHash(value))
        }
    }
}

impl From<LeafHash> for String {
    fn from(hash: LeafHash) -> Self {
        hash.0
    }
}

impl PartialEq<str> for LeafHash {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LeafHash {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// True if `value` is a well-formed SHA-256 digest in lowercase hex.
pub fn is_sha256_hex(value: &str) -> bool {
    value.len() == SHA256_HEX_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// Value of an event's `hash_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HashType {
    /// Flat SHA-256 (single resource, pre-Merkle events).
    #[default]
    #[serde(rename = "sha256")]
    Sha256,
    /// Merkle root over two or more leaves.
    #[serde(rename = "merkle-sha256")]
    MerkleSha256,
}

impl HashType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashType::Sha256 => "sha256",
            HashType::MerkleSha256 => "merkle-sha256",
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashType {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(HashType::Sha256),
            "merkle-sha256" => Ok(HashType::MerkleSha256),
            other => Err(HashError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Digest algorithm for flat governance hashes.
///
/// Merkle trees are always built with SHA-256; the wider digests are only
/// available for flat hashing of a single payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Length of a digest from this algorithm in hex characters.
    pub fn hex_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Sha384 => 96,
            HashAlgorithm::Sha512 => 128,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            other => Err(HashError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

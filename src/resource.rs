//! Governed resources: the inputs to the governance hash.
//!
//! A resource is a `(resource_type, resource_name, content)` triple. The type is
//! an open lowercase kebab-case vocabulary so new resource kinds never require a
//! schema change. Both type and name are colon-free, which keeps the
//! `type:name:content` concatenation unambiguous.

use crate::error::HashError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Pattern every resource type must match.
pub const RESOURCE_TYPE_PATTERN: &str = r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$";

static RESOURCE_TYPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RESOURCE_TYPE_PATTERN).expect("resource type regex is valid"));

/// Resource types defined by the AIGP event schema. Any other value matching
/// [`RESOURCE_TYPE_PATTERN`] is accepted as a custom type.
pub const STANDARD_RESOURCE_TYPES: [&str; 7] = [
    "policy", "prompt", "tool", "lineage", "context", "memory", "model",
];

/// Validated resource type, e.g. `policy` or `audit-log`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceType(String);

impl ResourceType {
    pub fn new(value: impl Into<String>) -> Result<Self, HashError> {
        let value = value.into();
        if RESOURCE_TYPE_REGEX.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(HashError::InvalidResourceType(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the seven types named by the event schema.
    pub fn is_standard(&self) -> bool {
        STANDARD_RESOURCE_TYPES.contains(&self.0.as_str())
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ResourceType {
    type Error = HashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourceType> for String {
    fn from(value: ResourceType) -> Self {
        value.0
    }
}

/// What a leaf hash covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashMode {
    /// Hash the inline content.
    #[default]
    Content,
    /// Hash the URI of an immutable external blob (pointer pattern).
    Pointer,
}

impl HashMode {
    pub fn is_content(&self) -> bool {
        matches!(self, HashMode::Content)
    }
}

/// Validate a resource name. Names are free-form apart from the separator.
pub fn validate_resource_name(name: &str) -> Result<(), HashError> {
    if name.contains(':') {
        return Err(HashError::InvalidResourceName(name.to_string()));
    }
    Ok(())
}

/// One governed artifact whose integrity is attested by the governance hash.
///
/// Construction validates every field, so a `GovernedResource` can always be
/// hashed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ResourceRecord", into = "ResourceRecord")]
pub struct GovernedResource {
    resource_type: ResourceType,
    resource_name: String,
    content: String,
    hash_mode: HashMode,
    content_ref: Option<String>,
}

impl GovernedResource {
    /// Resource whose inline content is hashed.
    pub fn new(
        resource_type: &str,
        resource_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, HashError> {
        let resource_type = ResourceType::new(resource_type)?;
        let resource_name = resource_name.into();
        validate_resource_name(&resource_name)?;
        Ok(Self {
            resource_type,
            resource_name,
            content: content.into(),
            hash_mode: HashMode::Content,
            content_ref: None,
        })
    }

    /// Resource governed by reference: the leaf covers `content_ref`, not the content.
    pub fn pointer(
        resource_type: &str,
        resource_name: impl Into<String>,
        content_ref: impl Into<String>,
    ) -> Result<Self, HashError> {
        let mut resource = Self::new(resource_type, resource_name, String::new())?;
        let content_ref = content_ref.into();
        if content_ref.is_empty() {
            return Err(HashError::MissingContentRef(resource.resource_name));
        }
        resource.hash_mode = HashMode::Pointer;
        resource.content_ref = Some(content_ref);
        Ok(resource)
    }

    /// Resource from raw bytes, rejecting content that is not valid UTF-8.
    pub fn from_bytes(
        resource_type: &str,
        resource_name: impl Into<String>,
        content: &[u8],
    ) -> Result<Self, HashError> {
        let resource_name = resource_name.into();
        let content = std::str::from_utf8(content).map_err(|e| HashError::InvalidContent {
            resource_name: resource_name.clone(),
            reason: e.to_string(),
        })?;
        Self::new(resource_type, resource_name, content)
    }

    pub fn resource_type(&self) -> &ResourceType {
        &self.resource_type
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn hash_mode(&self) -> HashMode {
        self.hash_mode
    }

    pub fn content_ref(&self) -> Option<&str> {
        self.content_ref.as_deref()
    }

    /// The payload that goes after the domain separator.
    pub fn hashable(&self) -> &str {
        match (self.hash_mode, self.content_ref.as_deref()) {
            (HashMode::Pointer, Some(uri)) => uri,
            _ => &self.content,
        }
    }
}

/// Wire form of a resource, as accepted in resource input files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ResourceRecord {
    resource_type: String,
    resource_name: String,
    #[serde(default)]
    content: String,
    #[serde(default, skip_serializing_if = "HashMode::is_content")]
    hash_mode: HashMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content_ref: Option<String>,
}

impl TryFrom<ResourceRecord> for GovernedResource {
    type Error = HashError;

    fn try_from(record: ResourceRecord) -> Result<Self, Self::Error> {
        let mut resource = Self::new(
            &record.resource_type,
            record.resource_name,
            record.content,
        )?;
        match record.hash_mode {
            HashMode::Content => {
                resource.content_ref = record.content_ref.filter(|r| !r.is_empty());
            }
            HashMode::Pointer => {
                let content_ref = record
                    .content_ref
                    .filter(|r| !r.is_empty())
                    .ok_or_else(|| HashError::MissingContentRef(resource.resource_name.clone()))?;
                resource.hash_mode = HashMode::Pointer;
                resource.content_ref = Some(content_ref);
            }
        }
        Ok(resource)
    }
}

impl From<GovernedResource> for ResourceRecord {
    fn from(resource: GovernedResource) -> Self {
        Self {
            resource_type: resource.resource_type.into(),
            resource_name: resource.resource_name,
            content: resource.content,
            hash_mode: resource.hash_mode,
            content_ref: resource.content_ref,
        }
    }
}

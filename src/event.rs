//! Governance event envelope
//!
//! The minimal AIGP event record that carries a governance hash. Producers
//! fill in identity and trace fields; the hasher output lands in
//! `governance_hash`, `hash_type` and `governance_merkle_tree`.

use crate::error::HashError;
use crate::resource::GovernedResource;
use crate::tree::{compute_governance_hash, GovernanceHash, MerkleTree};
use crate::types::HashType;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Event schema version written into new events.
pub const SPEC_VERSION: &str = "0.8.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernanceEvent {
    pub event_id: String,
    pub event_type: String,
    pub event_category: String,
    /// RFC 3339 UTC with millisecond precision, e.g. `2026-02-15T10:00:00.000Z`.
    pub event_time: String,
    pub agent_id: String,
    pub trace_id: String,
    #[serde(default)]
    pub governance_hash: String,
    #[serde(default)]
    pub hash_type: HashType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governance_merkle_tree: Option<MerkleTree>,
    /// Informational context. Not covered by the governance hash.
    #[serde(default)]
    pub annotations: Map<String, Value>,
    pub spec_version: String,
}

impl GovernanceEvent {
    /// New event with a fresh id and timestamp and no governance hash yet.
    pub fn new(
        event_type: impl Into<String>,
        event_category: impl Into<String>,
        agent_id: impl Into<String>,
        trace_id: impl Into<String>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            event_type: event_type.into(),
            event_category: event_category.into(),
            event_time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            agent_id: agent_id.into(),
            trace_id: trace_id.into(),
            governance_hash: String::new(),
            hash_type: HashType::Sha256,
            governance_merkle_tree: None,
            annotations: Map::new(),
            spec_version: SPEC_VERSION.to_string(),
        }
    }

    /// Embed a computed governance hash.
    pub fn with_governance(mut self, governance: GovernanceHash) -> Self {
        self.governance_hash = governance.root.into_string();
        self.hash_type = governance.hash_type;
        self.governance_merkle_tree = governance.tree;
        self
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// Recompute the governance hash over `resources` and compare it with the
    /// embedded `governance_hash` and `hash_type`.
    pub fn verify_governance(&self, resources: &[GovernedResource]) -> Result<bool, HashError> {
        let computed = compute_governance_hash(resources)?;
        Ok(computed.root == self.governance_hash.as_str() && computed.hash_type == self.hash_type)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

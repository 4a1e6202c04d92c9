//! Hash command presentation: governance, leaf and flat hash formatters.

use super::shared::{render_json, OutputFormat};
use crate::error::ApiError;
use crate::resource::GovernedResource;
use crate::tree::GovernanceHash;
use crate::types::{HashAlgorithm, LeafHash};
use serde_json::{json, Map, Value};

pub fn format_governance_hash(
    result: &GovernanceHash,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, ApiError> {
    match format {
        OutputFormat::Json => {
            let mut out = Map::new();
            out.insert("governance_hash".into(), Value::String(result.root.to_string()));
            out.insert("hash_type".into(), Value::String(result.hash_type.to_string()));
            if let Some(tree) = &result.tree {
                out.insert("governance_merkle_tree".into(), serde_json::to_value(tree)?);
            }
            render_json(&out, pretty)
        }
        OutputFormat::Text => {
            let mut s = format!(
                "governance_hash: {}\nhash_type: {}",
                result.root, result.hash_type
            );
            if let Some(tree) = &result.tree {
                s.push_str(&format!("\nleaves ({}):", tree.leaf_count));
                for (i, leaf) in tree.leaves.iter().enumerate() {
                    s.push_str(&format!(
                        "\n  {}. {}  {}  {}",
                        i + 1,
                        leaf.hash,
                        leaf.resource_type,
                        leaf.resource_name
                    ));
                    if let Some(content_ref) = &leaf.content_ref {
                        s.push_str(&format!(" -> {}", content_ref));
                    }
                }
            }
            Ok(s)
        }
    }
}

pub fn format_leaf_hash(
    resource: &GovernedResource,
    hash: &LeafHash,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, ApiError> {
    match format {
        OutputFormat::Json => {
            let mut out = json!({
                "resource_type": resource.resource_type().as_str(),
                "resource_name": resource.resource_name(),
                "hash": hash.as_str(),
            });
            if let Some(content_ref) = resource.content_ref() {
                out["hash_mode"] = json!("pointer");
                out["content_ref"] = json!(content_ref);
            }
            render_json(&out, pretty)
        }
        OutputFormat::Text => Ok(hash.to_string()),
    }
}

pub fn format_flat_hash(
    algorithm: HashAlgorithm,
    hash: &str,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, ApiError> {
    match format {
        OutputFormat::Json => render_json(
            &json!({ "algorithm": algorithm.as_str(), "hash": hash }),
            pretty,
        ),
        OutputFormat::Text => Ok(hash.to_string()),
    }
}

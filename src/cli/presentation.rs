//! CLI presentation: text and json formatters per command family.

mod hash;
mod shared;
mod verify;

pub use hash::{format_flat_hash, format_governance_hash, format_leaf_hash};
pub use shared::{render_json, OutputFormat};
pub use verify::{format_config_validation, format_verification, Verification};

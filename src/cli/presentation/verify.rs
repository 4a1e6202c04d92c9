//! Verification presentation: verify, verify-inclusion, verify-tree and config validation.

use super::shared::{render_json, OutputFormat};
use crate::config::ValidationError;
use crate::error::ApiError;
use serde::Serialize;

/// Outcome of a successful verification command. Failures surface as
/// `ApiError::VerificationFailed` so they map to exit code 1.
#[derive(Debug, Clone, Serialize)]
pub struct Verification {
    pub check: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    pub detail: String,
}

pub fn format_verification(
    verification: &Verification,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, ApiError> {
    match format {
        OutputFormat::Json => render_json(verification, pretty),
        OutputFormat::Text => Ok(format!("Verified: {}", verification.detail)),
    }
}

pub fn format_config_validation(errors: &[ValidationError]) -> String {
    if errors.is_empty() {
        return "Configuration is valid".to_string();
    }
    let mut s = format!("Configuration has {} error(s):", errors.len());
    for e in errors {
        s.push_str(&format!("\n  - {}", e));
    }
    s
}

//! Configuration System
//!
//! Layered configuration for the `aigp` command-line front end. Sources are
//! merged in order of increasing precedence: built-in defaults, the global
//! config file, workspace config files, then `AIGP__SECTION__KEY` environment
//! variables. The hashing core itself takes no configuration.

use crate::logging::LoggingConfig;
use crate::types::HashAlgorithm;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AigpConfig {
    /// Hashing defaults
    #[serde(default)]
    pub hashing: HashingConfig,

    /// Command output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Hashing defaults used when a command does not specify them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Algorithm for flat (non-Merkle) content hashes
    #[serde(default)]
    pub flat_algorithm: HashAlgorithm,
}

/// Command output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: text or json
    #[serde(default = "default_output_format")]
    pub format: String,

    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_output_format() -> String {
    "text".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
            pretty: default_pretty(),
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.format != "text" && self.format != "json" {
            return Err(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                self.format
            ));
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Output(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Output(msg) => write!(f, "Output: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl AigpConfig {
    /// Validate the entire configuration, collecting every problem
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.output.validate() {
            errors.push(ValidationError::Output(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

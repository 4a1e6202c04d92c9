//! Merge rules: defaults, override order, conflict handling.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("hashing.flat_algorithm", "sha256")?
        .set_default("output.format", "text")?
        .set_default("output.pretty", true)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}

/// Environment overrides: `AIGP__OUTPUT__FORMAT=json` sets `output.format`.
///
/// The double-underscore prefix separator keeps `AIGP_LOG*` and `AIGP_ENV`
/// out of the merged config.
pub fn environment_source() -> Environment {
    Environment::with_prefix("AIGP")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

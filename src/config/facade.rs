//! Config loading facade: one entry point that applies every source in order.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::AigpConfig;
use crate::error::ApiError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Loads [`AigpConfig`] from defaults, files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `config/config.toml`, workspace `config/{AIGP_ENV}.toml`, environment.
    pub fn load(workspace_root: &Path) -> Result<AigpConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config: AigpConfig = builder
            .add_source(merge_policy::environment_source())
            .build()?
            .try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from one explicit file over the defaults
    pub fn load_from_file(path: &Path) -> Result<AigpConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let config: AigpConfig = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()?;
        debug!(config_path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }

    #[cfg(test)]
    pub(crate) fn load_for_env(workspace_root: &Path, env_name: &str) -> Result<AigpConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = workspace_file::add_to_builder_for_env(builder, workspace_root, env_name)?;
        Ok(builder.build()?.try_deserialize()?)
    }
}

//! CLI route: single route table and run context. Dispatches to the hasher and presentation.

use crate::cli::command_name;
use crate::cli::parse::{
    Commands, ConfigCommands, FlatContentArgs, ResourceArgs, ResourceContentArgs,
};
use crate::cli::presentation::{
    format_config_validation, format_flat_hash, format_governance_hash, format_leaf_hash,
    format_verification, render_json, OutputFormat, Verification,
};
use crate::config::{AigpConfig, ConfigLoader};
use crate::error::ApiError;
use crate::event::GovernanceEvent;
use crate::resource::GovernedResource;
use crate::tree::{
    compute_flat_hash, compute_governance_hash, compute_leaf_hash, verify_full_tree,
    verify_published_tree, verify_resource_inclusion, MerkleTree,
};
use crate::types::HashAlgorithm;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runtime context for CLI execution: effective config and output settings.
pub struct RunContext {
    config: AigpConfig,
    format_override: Option<OutputFormat>,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::from_config(config))
    }

    /// Create run context from an already loaded config.
    ///
    /// `output.format` is not checked here so `config validate` can still
    /// report it alongside every other problem.
    pub fn from_config(config: AigpConfig) -> Self {
        Self {
            config,
            format_override: None,
        }
    }

    /// Override the configured output format.
    pub fn with_format(mut self, format: Option<&str>) -> Result<Self, ApiError> {
        if let Some(format) = format {
            self.format_override = Some(format.parse()?);
        }
        Ok(self)
    }

    /// Effective output format: the override, else `output.format` from config.
    pub fn output_format(&self) -> Result<OutputFormat, ApiError> {
        match self.format_override {
            Some(format) => Ok(format),
            None => self.config.output.format.parse(),
        }
    }

    pub fn config(&self) -> &AigpConfig {
        &self.config
    }

    /// Execute one command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let name = command_name(command);
        let start = Instant::now();
        let result = self.dispatch(command);
        let elapsed_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => info!(command = name, elapsed_ms, "Command completed"),
            Err(e) => warn!(command = name, elapsed_ms, error = %e, "Command failed"),
        }
        result
    }

    fn dispatch(&self, command: &Commands) -> Result<String, ApiError> {
        let pretty = self.config.output.pretty;
        let format = match command {
            Commands::Config { .. } => OutputFormat::default(),
            _ => self.output_format()?,
        };
        match command {
            Commands::Hash { input } => {
                let resources = read_resources(input)?;
                let result = compute_governance_hash(&resources)?;
                format_governance_hash(&result, format, pretty)
            }
            Commands::Leaf { resource } => {
                let resource = resource_from_args(resource)?;
                let hash = compute_leaf_hash(&resource);
                format_leaf_hash(&resource, &hash, format, pretty)
            }
            Commands::Flat { content, algorithm } => {
                let algorithm = match algorithm {
                    Some(name) => name.parse::<HashAlgorithm>()?,
                    None => self.config.hashing.flat_algorithm,
                };
                let content = flat_content(content)?;
                let hash = compute_flat_hash(&content, algorithm);
                format_flat_hash(algorithm, &hash, format, pretty)
            }
            Commands::Verify { input, root } => {
                let resources = read_resources(input)?;
                if !verify_full_tree(&resources, root)? {
                    let computed = compute_governance_hash(&resources)?.root;
                    return Err(ApiError::VerificationFailed(format!(
                        "computed root {} does not match claimed root {}",
                        computed, root
                    )));
                }
                let verification = Verification {
                    check: "full_tree",
                    root: Some(root.clone()),
                    detail: format!("root {} matches {} resource(s)", root, resources.len()),
                };
                format_verification(&verification, format, pretty)
            }
            Commands::VerifyInclusion { tree, resource } => {
                let document = read_tree_document(tree)?;
                let resource = resource_from_args(resource)?;
                let tree = document.tree();
                if !verify_resource_inclusion(&resource, tree) {
                    return Err(ApiError::VerificationFailed(format!(
                        "{} {} with leaf hash {} is not in the published tree",
                        resource.resource_type(),
                        resource.resource_name(),
                        compute_leaf_hash(&resource)
                    )));
                }
                let verification = Verification {
                    check: "inclusion",
                    root: document.governance_hash().map(str::to_string),
                    detail: format!(
                        "{} {} is leaf {} of {}",
                        resource.resource_type(),
                        resource.resource_name(),
                        compute_leaf_hash(&resource),
                        tree.leaf_count
                    ),
                };
                format_verification(&verification, format, pretty)
            }
            Commands::VerifyTree { tree, root } => {
                let document = read_tree_document(tree)?;
                let claimed = match (root.as_deref(), document.governance_hash()) {
                    (Some(root), _) => root.to_string(),
                    (None, Some(root)) => root.to_string(),
                    (None, None) => {
                        return Err(ApiError::InvalidInput(
                            "no --root given and the tree file has no governance_hash".to_string(),
                        ))
                    }
                };
                if !verify_published_tree(document.tree(), &claimed)? {
                    return Err(ApiError::VerificationFailed(format!(
                        "published leaves do not rebuild to root {}",
                        claimed
                    )));
                }
                let verification = Verification {
                    check: "published_tree",
                    detail: format!(
                        "{} published leaves rebuild to root {}",
                        document.tree().leaf_count,
                        claimed
                    ),
                    root: Some(claimed),
                };
                format_verification(&verification, format, pretty)
            }
            Commands::Event {
                input,
                event_type,
                category,
                agent,
                trace,
            } => {
                let resources = read_resources(input)?;
                let governance = compute_governance_hash(&resources)?;
                let event = GovernanceEvent::new(event_type, category, agent, trace)
                    .with_governance(governance);
                render_json(&event, pretty)
            }
            Commands::Config { command } => self.config_command(command, pretty),
        }
    }

    fn config_command(&self, command: &ConfigCommands, pretty: bool) -> Result<String, ApiError> {
        match command {
            ConfigCommands::Show => match self.output_format().unwrap_or_default() {
                OutputFormat::Json => render_json(&self.config, pretty),
                OutputFormat::Text => {
                    toml::to_string(&self.config).map_err(|e| ApiError::ConfigError(e.to_string()))
                }
            },
            ConfigCommands::Validate => match self.config.validate() {
                Ok(()) => Ok(format_config_validation(&[])),
                Err(errors) => Err(ApiError::ConfigError(format_config_validation(&errors))),
            },
        }
    }
}

/// A published tree file: either a bare tree or an event carrying one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TreeDocument {
    Event {
        governance_merkle_tree: MerkleTree,
        #[serde(default)]
        governance_hash: Option<String>,
    },
    Tree(MerkleTree),
}

impl TreeDocument {
    fn tree(&self) -> &MerkleTree {
        match self {
            TreeDocument::Event {
                governance_merkle_tree,
                ..
            } => governance_merkle_tree,
            TreeDocument::Tree(tree) => tree,
        }
    }

    fn governance_hash(&self) -> Option<&str> {
        match self {
            TreeDocument::Event {
                governance_hash, ..
            } => governance_hash.as_deref(),
            TreeDocument::Tree(_) => None,
        }
    }
}

/// Read a file, or stdin when the path is "-".
fn read_input(path: &Path) -> Result<String, ApiError> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).map_err(|e| {
        ApiError::InvalidInput(format!("Failed to read {}: {}", path.display(), e))
    })
}

fn read_resources(path: &Path) -> Result<Vec<GovernedResource>, ApiError> {
    let raw = read_input(path)?;
    let resources: Vec<GovernedResource> = serde_json::from_str(&raw)?;
    debug!(path = %path.display(), resource_count = resources.len(), "Read resources");
    Ok(resources)
}

fn read_tree_document(path: &Path) -> Result<TreeDocument, ApiError> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).map_err(|e| {
        ApiError::InvalidInput(format!(
            "{} is neither a governance_merkle_tree nor an event carrying one: {}",
            path.display(),
            e
        ))
    })
}

fn resource_from_args(args: &ResourceArgs) -> Result<GovernedResource, ApiError> {
    let ResourceContentArgs {
        content,
        content_file,
        content_ref,
    } = &args.content;
    let resource = match (content, content_file, content_ref) {
        (_, _, Some(uri)) => GovernedResource::pointer(&args.resource_type, &args.resource_name, uri)?,
        (_, Some(path), None) => {
            let bytes = std::fs::read(path)?;
            GovernedResource::from_bytes(&args.resource_type, &args.resource_name, &bytes)?
        }
        (Some(content), None, None) => {
            GovernedResource::new(&args.resource_type, &args.resource_name, content.as_str())?
        }
        (None, None, None) => {
            return Err(ApiError::InvalidInput(
                "one of --content, --content-file or --content-ref is required".to_string(),
            ))
        }
    };
    Ok(resource)
}

fn flat_content(args: &FlatContentArgs) -> Result<String, ApiError> {
    match (&args.content, &args.content_file) {
        (Some(content), None) => Ok(content.clone()),
        (None, Some(path)) => {
            let bytes = std::fs::read(path)?;
            String::from_utf8(bytes).map_err(|e| {
                ApiError::InvalidInput(format!("{} is not valid UTF-8: {}", path.display(), e))
            })
        }
        _ => Err(ApiError::InvalidInput(
            "exactly one of --content or --content-file is required".to_string(),
        )),
    }
}

//! CLI parse: clap types for aigp. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// aigp - governance hashing for AI governance proof events
#[derive(Parser, Debug)]
#[command(name = "aigp", version)]
#[command(about = "Compute and verify AIGP governance hashes (flat SHA-256 and Merkle)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (for config/config.toml)
    #[arg(long, global = true, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json); overrides output.format from config
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Enable logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the governance hash of a resource file (JSON array, "-" for stdin)
    Hash {
        #[arg(long)]
        input: PathBuf,
    },
    /// Compute the leaf hash of one resource
    Leaf {
        #[command(flatten)]
        resource: ResourceArgs,
    },
    /// Compute a flat (non-Merkle) hash of some content
    Flat {
        #[command(flatten)]
        content: FlatContentArgs,
        /// Hash algorithm (sha256, sha384, sha512); defaults to hashing.flat_algorithm
        #[arg(long)]
        algorithm: Option<String>,
    },
    /// Recompute the governance hash of a resource file and compare with a claimed root
    Verify {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        root: String,
    },
    /// Check that one resource is listed in a published Merkle tree
    VerifyInclusion {
        /// Published tree, or an event carrying governance_merkle_tree
        #[arg(long)]
        tree: PathBuf,
        #[command(flatten)]
        resource: ResourceArgs,
    },
    /// Rebuild the root from a published tree's leaves and compare with a claimed root
    VerifyTree {
        /// Published tree, or an event carrying governance_merkle_tree
        #[arg(long)]
        tree: PathBuf,
        /// Claimed root; defaults to the event's governance_hash
        #[arg(long)]
        root: Option<String>,
    },
    /// Emit a governance event carrying the governance hash of a resource file
    Event {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        event_type: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        agent: String,
        #[arg(long)]
        trace: String,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Validate the effective configuration
    Validate,
}

/// One governed resource given on the command line.
#[derive(Args, Debug, Clone)]
pub struct ResourceArgs {
    /// Resource type (lowercase kebab-case, e.g. policy)
    #[arg(long = "type")]
    pub resource_type: String,

    /// Resource name (e.g. policy.refund-limits)
    #[arg(long = "name")]
    pub resource_name: String,

    #[command(flatten)]
    pub content: ResourceContentArgs,
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct ResourceContentArgs {
    /// Inline content
    #[arg(long)]
    pub content: Option<String>,

    /// Read content from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Govern by reference: hash this URI instead of the content
    #[arg(long)]
    pub content_ref: Option<String>,
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct FlatContentArgs {
    /// Inline content
    #[arg(long)]
    pub content: Option<String>,

    /// Read content from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,
}

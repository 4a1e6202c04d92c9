//! CLI command-name contract for logging and routing.

use crate::cli::parse::{Commands, ConfigCommands};

/// Stable command name (e.g. "hash", "config.show").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Hash { .. } => "hash",
        Commands::Leaf { .. } => "leaf",
        Commands::Flat { .. } => "flat",
        Commands::Verify { .. } => "verify",
        Commands::VerifyInclusion { .. } => "verify_inclusion",
        Commands::VerifyTree { .. } => "verify_tree",
        Commands::Event { .. } => "event",
        Commands::Config { command } => match command {
            ConfigCommands::Show => "config.show",
            ConfigCommands::Validate => "config.validate",
        },
    }
}

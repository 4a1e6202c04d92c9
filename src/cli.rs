//! CLI domain: parse, route, help, output, and presentation only.
//! No hashing logic here; the route table dispatches to the tree and event APIs.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{exit_code, map_error};
pub use parse::{Cli, Commands, ConfigCommands};
pub use presentation::OutputFormat;
pub use route::RunContext;

//! Configuration file sources, in order of increasing precedence.

pub mod global_file;
pub mod workspace_file;

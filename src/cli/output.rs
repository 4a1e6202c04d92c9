//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    e.to_string()
}

/// Process exit code for an error: 1 when verification ran and failed,
/// 2 for anything that kept it from running.
pub fn exit_code(e: &ApiError) -> i32 {
    match e {
        ApiError::VerificationFailed(_) => 1,
        _ => 2,
    }
}

//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
///
/// Resolution outcomes (not found, is a directory) print bare, the way a
/// shell would; configuration and load failures carry the program prefix.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::NotFound(_) | ApiError::IsADirectory(_) => e.to_string(),
        other => format!("pathwalk: {}", other),
    }
}

//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::StampError;

/// Map domain errors to the message printed on stderr.
pub fn map_error(e: &StampError) -> String {
    match e {
        StampError::RootNotFound(_) | StampError::RootNotDirectory(_) => {
            format!("error: {}. Pass --root or run from the project directory.", e)
        }
        _ => format!("error: {}", e),
    }
}

//! CLI output: error mapping from domain errors to the diagnostic line.

use crate::error::ScatterError;

/// Map a domain error to the single diagnostic printed on fatal failure.
pub fn map_error(e: &ScatterError) -> String {
    format!("Error: {}", e)
}

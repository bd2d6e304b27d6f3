//! Folding a prior manifest into a fresh build
//!
//! Merge is a best-effort convenience: a missing prior manifest is normal
//! (first run), and an unreadable or malformed one downgrades to a warning
//! rather than failing a build that is otherwise complete.

use crate::manifest::Manifest;
use std::path::Path;
use tracing::{debug, warn};

/// Fold entries from a previously written manifest into `fresh`.
///
/// Prior entries are inserted only where the key is absent; fresh entries
/// always take precedence. Returns `fresh` unchanged when the prior manifest
/// does not exist or cannot be read.
pub fn merge_prior(mut fresh: Manifest, prior_path: &Path) -> Manifest {
    if !prior_path.exists() {
        debug!(path = ?prior_path, "No prior manifest; skipping merge");
        return fresh;
    }

    let prior = match Manifest::load(prior_path) {
        Ok(prior) => prior,
        Err(e) => {
            warn!(
                path = ?prior_path,
                "Failed to read prior manifest, continuing without merge: {}", e
            );
            return fresh;
        }
    };

    for (original, hashed) in prior {
        if !fresh.contains_key(&original) {
            fresh.insert(original, hashed);
        }
    }
    fresh
}

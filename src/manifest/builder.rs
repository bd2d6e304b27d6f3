//! Manifest construction: walk, classify, hash, record

use crate::error::BuildError;
use crate::hasher::{self, HashOutcome};
use crate::manifest::Manifest;
use crate::walker::{Walker, WalkerConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Builds a manifest for one base directory.
///
/// Building is all-or-nothing: the first walk or hash failure aborts and no
/// partial manifest is returned. Candidates that resolve to directories are
/// the one recoverable case and are skipped silently.
pub struct ManifestBuilder {
    base_path: PathBuf,
    walker: Walker,
}

impl ManifestBuilder {
    /// Create a builder rooted at `base_path` with the given walk rules.
    ///
    /// The base path is canonicalized so candidate paths can be made relative
    /// to it reliably.
    pub fn new(base_path: &Path, config: &WalkerConfig) -> Result<Self, BuildError> {
        let base_path = dunce::canonicalize(base_path).map_err(|e| {
            BuildError::InvalidPath(format!(
                "Failed to canonicalize base path {:?}: {}",
                base_path, e
            ))
        })?;
        let walker = Walker::new(base_path.clone(), config)?;
        Ok(Self { base_path, walker })
    }

    /// Walk, hash each candidate, and assemble the manifest.
    pub fn build(&self) -> Result<Manifest, BuildError> {
        let mut manifest = Manifest::new();

        for candidate in self.walker.walk()? {
            match hasher::hash_path(&candidate)? {
                HashOutcome::SkippedDirectory => {
                    debug!(path = ?candidate, "Skipping directory candidate");
                }
                HashOutcome::Hashed(hashed) => {
                    let original = self.relative(&candidate)?;
                    let hashed = self.relative(&hashed)?;
                    manifest.insert(original, hashed);
                }
            }
        }

        Ok(manifest)
    }

    fn relative(&self, path: &Path) -> Result<String, BuildError> {
        let relative = path.strip_prefix(&self.base_path).map_err(|_| {
            BuildError::InvalidPath(format!(
                "Path {:?} is outside base path {:?}",
                path, self.base_path
            ))
        })?;
        Ok(relative.to_string_lossy().into_owned())
    }
}

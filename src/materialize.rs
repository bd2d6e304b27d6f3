//! Materialization: producing hashed output files on disk

use crate::error::MaterializeError;
use crate::manifest::Manifest;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How hashed outputs are produced from their sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterializeMode {
    /// Hard-link source to destination (same filesystem required)
    Link,
    /// Byte-for-byte copy
    Copy,
}

/// Creates hashed output files for every manifest entry.
///
/// Manifest keys and values are base-relative; both sides are joined against
/// their respective base paths here. Entries are independent: each creates
/// its own parent directory chain and overwrites any stale destination. The
/// first failure aborts, leaving already materialized entries in place.
pub struct Materializer {
    mode: MaterializeMode,
    src_base: PathBuf,
    dst_base: PathBuf,
}

impl Materializer {
    /// Create a materializer joining sources and destinations against the
    /// given base paths.
    pub fn new(mode: MaterializeMode, src_base: &Path, dst_base: &Path) -> Self {
        Self {
            mode,
            src_base: src_base.to_path_buf(),
            dst_base: dst_base.to_path_buf(),
        }
    }

    /// Materialize every entry of the manifest.
    pub fn materialize(&self, manifest: &Manifest) -> Result<(), MaterializeError> {
        for (original, hashed) in manifest.iter() {
            let src = self.src_base.join(original);
            let dst = self.dst_base.join(hashed);
            self.place_entry(&src, &dst)?;
        }
        Ok(())
    }

    fn place_entry(&self, src: &Path, dst: &Path) -> Result<(), MaterializeError> {
        if let Some(parent) = dst.parent() {
            // create_dir_all succeeds when the directory already exists
            std::fs::create_dir_all(parent).map_err(|source| MaterializeError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        // A stale destination from a previous run is always replaced
        match std::fs::symlink_metadata(dst) {
            Ok(_) => {
                std::fs::remove_file(dst).map_err(|source| MaterializeError::Remove {
                    path: dst.to_path_buf(),
                    source,
                })?;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(MaterializeError::Stat {
                    path: dst.to_path_buf(),
                    source,
                });
            }
        }

        debug!(?src, ?dst, mode = ?self.mode, "Materializing entry");
        match self.mode {
            MaterializeMode::Link => {
                std::fs::hard_link(src, dst).map_err(|source| MaterializeError::Link {
                    src: src.to_path_buf(),
                    dst: dst.to_path_buf(),
                    source,
                })?;
            }
            MaterializeMode::Copy => {
                std::fs::copy(src, dst).map_err(|source| MaterializeError::Copy {
                    src: src.to_path_buf(),
                    dst: dst.to_path_buf(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

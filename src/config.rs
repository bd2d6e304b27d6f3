//! Run configuration
//!
//! One explicit struct describes everything a build needs: base path,
//! pattern axes, materialization mode, and output routing. Nothing is read
//! from ambient/global state.

use crate::materialize::MaterializeMode;
use crate::walker::{WalkerConfig, DEFAULT_DIR_PATTERN};
use std::path::PathBuf;

/// Configuration for a single manifest build.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Base directory to process from; manifest paths are relative to it
    pub base_path: PathBuf,
    /// Regex for directory names to descend into
    pub dir_pattern: String,
    /// Filename glob patterns selecting candidate files
    pub file_globs: Vec<String>,
    /// Link or copy when materializing
    pub mode: MaterializeMode,
    /// Compute the manifest without materializing files
    pub dry_run: bool,
    /// Prior manifest to fold into the result, if any
    pub merge_path: Option<PathBuf>,
    /// Manifest output file (stdout when unset)
    pub output: Option<PathBuf>,
}

impl RunConfig {
    /// Configuration with defaults: current behavior of the tool when only
    /// globs are given — hard links, no merge, manifest to stdout.
    pub fn new(base_path: PathBuf, file_globs: Vec<String>) -> Self {
        Self {
            base_path,
            dir_pattern: DEFAULT_DIR_PATTERN.to_string(),
            file_globs,
            mode: MaterializeMode::Link,
            dry_run: false,
            merge_path: None,
            output: None,
        }
    }

    /// Walker configuration for this run.
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            dir_pattern: self.dir_pattern.clone(),
            file_globs: self.file_globs.clone(),
            follow_symlinks: false,
        }
    }
}

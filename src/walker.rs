//! Filesystem walker for selecting manifest candidates

use crate::error::BuildError;
use crate::manifest::name;
use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;
use std::collections::BTreeSet;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Default directory inclusion pattern: everything except dot-directories.
pub const DEFAULT_DIR_PATTERN: &str = "^[^.].*";

/// Walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Regex a directory name must match for its subtree to be traversed
    pub dir_pattern: String,
    /// Glob patterns a file name must match to become a candidate
    pub file_globs: Vec<String>,
    /// Whether to follow symbolic links (default: false for determinism)
    pub follow_symlinks: bool,
}

impl WalkerConfig {
    /// Configuration with the default directory pattern and the given globs.
    pub fn with_globs(file_globs: Vec<String>) -> Self {
        Self {
            dir_pattern: DEFAULT_DIR_PATTERN.to_string(),
            file_globs,
            follow_symlinks: false,
        }
    }
}

/// Filesystem walker
///
/// Traverses a base directory pre-order, pruning any non-root directory whose
/// name fails the configured regex, and yields files whose names match a
/// configured glob and are not already hashed outputs.
pub struct Walker {
    root: PathBuf,
    dir_pattern: Regex,
    file_globs: GlobSet,
    follow_symlinks: bool,
}

impl Walker {
    /// Create a walker, compiling both pattern axes up front.
    ///
    /// Malformed patterns fail here, before any filesystem I/O.
    pub fn new(root: PathBuf, config: &WalkerConfig) -> Result<Self, BuildError> {
        let dir_pattern =
            Regex::new(&config.dir_pattern).map_err(|e| BuildError::Pattern {
                pattern: config.dir_pattern.clone(),
                reason: e.to_string(),
            })?;

        let mut builder = GlobSetBuilder::new();
        for pattern in &config.file_globs {
            let glob = Glob::new(pattern).map_err(|e| BuildError::Pattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;
            builder.add(glob);
        }
        let file_globs = builder.build().map_err(|e| BuildError::Pattern {
            pattern: config.file_globs.join(", "),
            reason: e.to_string(),
        })?;

        Ok(Self {
            root,
            dir_pattern,
            file_globs,
            follow_symlinks: config.follow_symlinks,
        })
    }

    /// Walk the filesystem and collect candidate file paths.
    ///
    /// Returns paths deduplicated and sorted for determinism; ordering is not
    /// semantically significant downstream.
    pub fn walk(&self) -> Result<Vec<PathBuf>, BuildError> {
        let mut candidates = BTreeSet::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.follow_symlinks)
            .into_iter()
            .filter_entry(|entry| self.should_descend(entry));

        for entry in walker {
            let entry =
                entry.map_err(|e| BuildError::Walk(format!("Failed to read entry: {}", e)))?;

            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if !self.file_globs.is_match(file_name.as_ref()) {
                continue;
            }
            if name::is_hashed_path(&file_name) {
                continue;
            }

            candidates.insert(entry.path().to_path_buf());
        }

        Ok(candidates.into_iter().collect())
    }

    /// Pruning predicate: the root always descends; other directories only
    /// when their name matches the directory pattern. Files pass through.
    fn should_descend(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        self.dir_pattern
            .is_match(&entry.file_name().to_string_lossy())
    }
}

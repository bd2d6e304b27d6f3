//! Manifest: the mapping from original paths to hashed paths
//!
//! Keys and values are relative to the build's base path. Entries are kept in
//! a sorted map so JSON emission is deterministic regardless of traversal
//! order.

pub mod builder;
pub mod merge;
pub mod name;

pub use builder::ManifestBuilder;
pub use merge::merge_prior;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Mapping from original relative path to hashed relative path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, String>,
}

impl Manifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mapping. The fresh value wins on duplicate keys.
    pub fn insert(&mut self, original: String, hashed: String) {
        self.entries.insert(original, hashed);
    }

    /// Look up the hashed path for an original path.
    pub fn get(&self, original: &str) -> Option<&String> {
        self.entries.get(original)
    }

    /// Whether an original path already has an entry.
    pub fn contains_key(&self, original: &str) -> bool {
        self.entries.contains_key(original)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    /// Serialize to pretty-printed JSON (tab indent, trailing newline).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        buf.push(b'\n');
        String::from_utf8(buf).map_err(serde::ser::Error::custom)
    }

    /// Load a previously written manifest from disk.
    pub fn load(path: &Path) -> Result<Self, std::io::Error> {
        let bytes = std::fs::read(path)?;
        serde_json::from_slice(&bytes).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to parse manifest {:?}: {}", path, e),
            )
        })
    }
}

impl IntoIterator for Manifest {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

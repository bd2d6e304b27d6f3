//! Merge precedence: fresh entries win, prior entries fill gaps

use scatter::manifest::{merge_prior, Manifest, ManifestBuilder};
use scatter::walker::WalkerConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_merge_precedence_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    // Prior manifest: a.txt with an old hash, plus an entry for a file
    // the current build no longer regenerates
    let mut prior = Manifest::new();
    prior.insert("a.txt".to_string(), "a.OLDHASH.txt".to_string());
    prior.insert("gone.txt".to_string(), "gone.OLDHASH.txt".to_string());
    let prior_path = root.join("manifest.json");
    fs::write(&prior_path, prior.to_json().unwrap()).unwrap();

    fs::write(root.join("a.txt"), b"fresh a").unwrap();
    fs::write(root.join("b.txt"), b"fresh b").unwrap();

    let config = WalkerConfig::with_globs(vec!["a.txt".to_string(), "b.txt".to_string()]);
    let fresh = ManifestBuilder::new(root, &config).unwrap().build().unwrap();
    let merged = merge_prior(fresh.clone(), &prior_path);

    // Fresh mapping for a.txt survives, b.txt is added, gone.txt carried over
    assert_eq!(merged.get("a.txt"), fresh.get("a.txt"));
    assert_ne!(merged.get("a.txt").unwrap(), "a.OLDHASH.txt");
    assert!(merged.get("b.txt").is_some());
    assert_eq!(merged.get("gone.txt").unwrap(), "gone.OLDHASH.txt");
    assert_eq!(merged.len(), 3);
}

#[test]
fn test_merge_with_absent_prior_is_identity() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("a.txt"), b"a").unwrap();

    let config = WalkerConfig::with_globs(vec!["*.txt".to_string()]);
    let fresh = ManifestBuilder::new(root, &config).unwrap().build().unwrap();

    let merged = merge_prior(fresh.clone(), &root.join("does-not-exist.json"));
    assert_eq!(merged, fresh);
}

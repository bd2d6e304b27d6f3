//! Directory pruning: subtrees failing the inclusion pattern are never hashed

use scatter::manifest::ManifestBuilder;
use scatter::walker::WalkerConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_dot_directories_pruned_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir(root.join(".git")).unwrap();
    fs::write(root.join(".git").join("icon.png"), b"png").unwrap();
    fs::write(root.join("icon.png"), b"png").unwrap();

    let config = WalkerConfig::with_globs(vec!["*.png".to_string()]);
    let manifest = ManifestBuilder::new(root, &config).unwrap().build().unwrap();

    assert_eq!(manifest.len(), 1);
    assert!(manifest.get("icon.png").is_some());
}

#[test]
fn test_pruning_applies_to_whole_subtree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    // matching file nested below an excluded directory must not appear,
    // even though its own name matches the glob
    fs::create_dir_all(root.join(".cache").join("assets")).unwrap();
    fs::write(
        root.join(".cache").join("assets").join("deep.png"),
        b"png",
    )
    .unwrap();

    let config = WalkerConfig::with_globs(vec!["*.png".to_string()]);
    let manifest = ManifestBuilder::new(root, &config).unwrap().build().unwrap();

    assert!(manifest.is_empty());
}

#[test]
fn test_custom_directory_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir(root.join("assets")).unwrap();
    fs::write(root.join("assets").join("a.css"), b"a").unwrap();
    fs::create_dir(root.join("vendor")).unwrap();
    fs::write(root.join("vendor").join("v.css"), b"v").unwrap();

    let config = WalkerConfig {
        dir_pattern: "^assets$".to_string(),
        file_globs: vec!["*.css".to_string()],
        follow_symlinks: false,
    };
    let manifest = ManifestBuilder::new(root, &config).unwrap().build().unwrap();

    assert_eq!(manifest.len(), 1);
    let key = format!("assets{}a.css", std::path::MAIN_SEPARATOR);
    assert!(manifest.get(&key).is_some());
}

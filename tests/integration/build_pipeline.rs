//! End-to-end pipeline tests: walk, hash, build, materialize

use scatter::hasher::fingerprint_bytes;
use scatter::manifest::ManifestBuilder;
use scatter::materialize::{MaterializeMode, Materializer};
use scatter::walker::WalkerConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_end_to_end_copy_mode() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    // logo.png is selected; build/out.tmp fails the filename glob
    fs::write(root.join("logo.png"), b"X").unwrap();
    fs::create_dir(root.join("build")).unwrap();
    fs::write(root.join("build").join("out.tmp"), b"tmp").unwrap();

    let config = WalkerConfig::with_globs(vec!["*.png".to_string()]);
    let manifest = ManifestBuilder::new(root, &config).unwrap().build().unwrap();

    let fp = fingerprint_bytes(b"X");
    let hashed = format!("logo.{}.png", fp);
    assert_eq!(manifest.len(), 1);
    assert_eq!(manifest.get("logo.png").unwrap(), &hashed);

    Materializer::new(MaterializeMode::Copy, root, root)
        .materialize(&manifest)
        .unwrap();

    let original = fs::read(root.join("logo.png")).unwrap();
    let materialized = fs::read(root.join(&hashed)).unwrap();
    assert_eq!(original, materialized);
}

#[test]
fn test_end_to_end_link_mode() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("app.js"), b"let x = 1;").unwrap();

    let config = WalkerConfig::with_globs(vec!["*.js".to_string()]);
    let manifest = ManifestBuilder::new(root, &config).unwrap().build().unwrap();

    Materializer::new(MaterializeMode::Link, root, root)
        .materialize(&manifest)
        .unwrap();

    let hashed = manifest.get("app.js").unwrap();
    assert_eq!(fs::read(root.join(hashed)).unwrap(), b"let x = 1;");
}

#[test]
fn test_manifest_json_shape() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("b.css"), b"b").unwrap();
    fs::write(root.join("a.css"), b"a").unwrap();

    let config = WalkerConfig::with_globs(vec!["*.css".to_string()]);
    let manifest = ManifestBuilder::new(root, &config).unwrap().build().unwrap();

    let json = manifest.to_json().unwrap();
    assert!(json.starts_with('{'));
    assert!(json.ends_with("}\n"));
    // Sorted keys: a.css before b.css
    assert!(json.find("a.css").unwrap() < json.find("b.css").unwrap());

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_object().unwrap().len(), 2);
}

#[test]
fn test_identical_content_identical_hashed_suffix() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("one.txt"), b"same bytes").unwrap();
    fs::write(root.join("two.txt"), b"same bytes").unwrap();

    let config = WalkerConfig::with_globs(vec!["*.txt".to_string()]);
    let manifest = ManifestBuilder::new(root, &config).unwrap().build().unwrap();

    let fp = fingerprint_bytes(b"same bytes");
    assert_eq!(manifest.get("one.txt").unwrap(), &format!("one.{}.txt", fp));
    assert_eq!(manifest.get("two.txt").unwrap(), &format!("two.{}.txt", fp));
}

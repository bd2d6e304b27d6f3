//! Scatter: Content-Addressed File Manifests
//!
//! Hashes selected files, materializes `basename.HASH.ext` copies or hard
//! links next to the originals, and emits a JSON manifest mapping original
//! paths to hashed paths for use by cache-busting build tooling.

pub mod cli;
pub mod config;
pub mod error;
pub mod hasher;
pub mod logging;
pub mod manifest;
pub mod materialize;
pub mod walker;

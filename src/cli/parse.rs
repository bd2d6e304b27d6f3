//! CLI parse: clap types for Scatter. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Scatter CLI - content-addressed file manifests
///
/// For each selected file, computes a content hash and hard-links (or
/// copies) basename.HASH.ext next to it, then prints a JSON object mapping
/// input to output paths for use as a file manifest by some other tool.
#[derive(Parser)]
#[command(name = "scatter")]
#[command(about = "Hash files and emit a cache-busting path manifest")]
pub struct Cli {
    /// Filename glob patterns to select files (e.g. "*.css" "*.js")
    #[arg(required = true, value_name = "GLOB")]
    pub globs: Vec<String>,

    /// Base directory to process from
    #[arg(long, default_value = ".")]
    pub base_path: PathBuf,

    /// Regex for directory names to descend into
    #[arg(long, default_value = crate::walker::DEFAULT_DIR_PATTERN)]
    pub dir_pattern: String,

    /// Just create the JSON manifest; don't materialize files
    #[arg(long)]
    pub dry_run: bool,

    /// Copy files instead of hard-linking them
    #[arg(long)]
    pub copy: bool,

    /// Fold entries from a previously written manifest into the result
    #[arg(long, value_name = "FILE")]
    pub merge: Option<PathBuf>,

    /// File to save manifest (stdout if unset)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

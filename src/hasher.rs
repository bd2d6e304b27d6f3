//! Content fingerprinting using BLAKE3
//!
//! Fingerprints are 128-bit BLAKE3 extended outputs rendered as 32 lowercase
//! hex characters. The width is a naming convention, not a security claim:
//! hashed filenames embed the fingerprint between basename and extension, and
//! the classifier in [`crate::manifest::name`] recognizes hashed names purely
//! by that width.

use crate::error::BuildError;
use crate::manifest::name;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Byte length of a content fingerprint.
pub const FINGERPRINT_LEN: usize = 16;

/// Character length of a hex-rendered fingerprint.
pub const FINGERPRINT_HEX_LEN: usize = FINGERPRINT_LEN * 2;

/// Outcome of hashing a candidate path.
///
/// Directories are matched only incidentally by filename globs and are not
/// manifest members, so the skip is a first-class variant rather than an
/// error the caller has to sniff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashOutcome {
    /// The path was hashed; carries the derived hashed path.
    Hashed(PathBuf),
    /// The path resolved to a directory and was excluded.
    SkippedDirectory,
}

/// Compute the content fingerprint of a byte slice.
pub fn fingerprint_bytes(data: &[u8]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(data);
    finalize(hasher)
}

/// Compute the content fingerprint of a reader, consuming it fully.
///
/// Reads in 64 KiB chunks so large assets are never held in memory whole.
pub fn fingerprint_reader<R: Read>(mut reader: R) -> Result<String, std::io::Error> {
    let mut hasher = blake3::Hasher::new();
    let mut buffer = vec![0u8; 64 * 1024];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(finalize(hasher))
}

/// Hash a file and derive its hashed path.
///
/// Returns [`HashOutcome::SkippedDirectory`] when the path is a directory.
/// A missing path is reported as [`BuildError::NotFound`]; any other read
/// failure propagates as [`BuildError::Io`].
pub fn hash_path(path: &Path) -> Result<HashOutcome, BuildError> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(BuildError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(BuildError::Io(e)),
    };

    if metadata.is_dir() {
        return Ok(HashOutcome::SkippedDirectory);
    }

    let file = std::fs::File::open(path)?;
    let fingerprint = fingerprint_reader(file)?;

    let hashed = name::hashed_name(&path.to_string_lossy(), &fingerprint);
    Ok(HashOutcome::Hashed(PathBuf::from(hashed)))
}

fn finalize(hasher: blake3::Hasher) -> String {
    let mut out = [0u8; FINGERPRINT_LEN];
    hasher.finalize_xof().fill(&mut out);
    hex::encode(out)
}

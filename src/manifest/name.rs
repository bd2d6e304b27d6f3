//! Hashed filename convention
//!
//! A hashed name is `<basename>.<fingerprint><extension>`: the fingerprint is
//! spliced between a path's basename and its extension, so `css/site.css`
//! with fingerprint `abc...` becomes `css/site.abc....css`. Pure string
//! computation; no filesystem access.

use crate::hasher::FINGERPRINT_HEX_LEN;

/// Split a path into basename and extension.
///
/// The extension is the suffix of the final path component starting at its
/// last `.` (dot included), or empty when the component has no dot.
/// Invariant: `basename + extension == path`.
pub fn split_name(path: &str) -> (&str, &str) {
    let component_start = path.rfind(['/', '\\']).map_or(0, |i| i + 1);
    match path[component_start..].rfind('.') {
        Some(i) => path.split_at(component_start + i),
        None => (path, ""),
    }
}

/// Derive the hashed name for a path from its content fingerprint.
pub fn hashed_name(path: &str, fingerprint: &str) -> String {
    let (basename, ext) = split_name(path);
    format!("{}.{}{}", basename, fingerprint, ext)
}

/// Check whether a filename already encodes a content fingerprint.
///
/// True iff the inner extension of the basename (the segment the fingerprint
/// occupies in a hashed name) is exactly one dot plus a fingerprint's worth
/// of hex characters long. Used to keep repeated runs from re-hashing their
/// own outputs.
pub fn is_hashed_path(path: &str) -> bool {
    let (basename, _ext) = split_name(path);
    let (_, inner_ext) = split_name(basename);
    inner_ext.len() == FINGERPRINT_HEX_LEN + 1
}

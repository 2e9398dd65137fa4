//! Mapping of request paths onto files under the site root.

use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode_str;

use crate::error::CoreError;

/// File served for `/` and for directory paths.
pub const INDEX_FILE: &str = "index.html";

/// Resolve a URL path to a file path under `root`.
///
/// The path is percent-decoded and normalized lexically: `.` segments and
/// empty segments are dropped, `..` pops the previous segment. A `..` that
/// would climb above `root`, a NUL byte, or a segment that is not a plain
/// file name is rejected as [`CoreError::Forbidden`]. The empty path maps to
/// [`INDEX_FILE`]. The file is not required to exist.
pub fn resolve_site_path(root: &Path, request_path: &str) -> Result<PathBuf, CoreError> {
    let decoded = percent_decode_str(request_path)
        .decode_utf8()
        .map_err(|_| CoreError::NotFound(request_path.to_string()))?;

    if decoded.contains('\0') {
        return Err(CoreError::Forbidden(request_path.to_string()));
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(CoreError::Forbidden(request_path.to_string()));
                }
            }
            name => {
                if !is_plain_name(name) {
                    return Err(CoreError::Forbidden(request_path.to_string()));
                }
                segments.push(name);
            }
        }
    }

    if segments.is_empty() {
        return Ok(root.join(INDEX_FILE));
    }

    let mut path = root.to_path_buf();
    path.extend(segments);
    Ok(path)
}

/// A single path component with no separators or platform prefixes.
fn is_plain_name(segment: &str) -> bool {
    if segment.contains('\\') {
        return false;
    }
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

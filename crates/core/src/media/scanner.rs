//! Bounded-depth walk of the media root.
//!
//! Files directly in the root (depth 0) and one subdirectory down (depth 1)
//! are classified by extension. Anything deeper is never visited.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::CoreError;

/// Deepest directory level (relative to the root) whose files are scanned.
pub const MAX_SCAN_DEPTH: usize = 1;

/// Lowercased extensions classified as videos.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm"];

/// Lowercased extensions classified as thumbnails.
pub const THUMBNAIL_EXTENSIONS: &[&str] = &["webp"];

/// Basename (file name minus extension) -> full path.
pub type CandidateSet = BTreeMap<String, PathBuf>;

/// Kind of media a file was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Thumbnail,
}

impl MediaKind {
    /// Classify a path by its extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Video)
        } else if THUMBNAIL_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Thumbnail)
        } else {
            None
        }
    }
}

/// The two classified sets produced by a scan.
#[derive(Debug, Default)]
pub struct CandidateSets {
    pub videos: CandidateSet,
    pub thumbnails: CandidateSet,
}

impl CandidateSets {
    fn insert(&mut self, kind: MediaKind, basename: String, path: PathBuf) {
        let set = match kind {
            MediaKind::Video => &mut self.videos,
            MediaKind::Thumbnail => &mut self.thumbnails,
        };

        match set.entry(basename) {
            Entry::Vacant(slot) => {
                slot.insert(path);
            }
            Entry::Occupied(existing) => {
                tracing::warn!(
                    basename = %existing.key(),
                    kept = %existing.get().display(),
                    ignored = %path.display(),
                    ?kind,
                    "Duplicate media basename",
                );
            }
        }
    }
}

/// Regular files, or symlinks whose target is a regular file.
///
/// Symlinked directories are never descended into. A dangling link is
/// skipped since there is nothing to play.
fn is_regular_file(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    if !file_type.is_symlink() {
        return false;
    }

    match std::fs::metadata(entry.path()) {
        Ok(target) => target.is_file(),
        Err(e) => {
            tracing::warn!(path = %entry.path().display(), error = %e, "Skipping dangling symlink");
            false
        }
    }
}

/// Walk `root` and classify every video and thumbnail within depth bounds.
///
/// Directory entries are visited in file-name order, so when two files
/// share a basename within one set the first one visited is kept. Any
/// traversal error aborts the whole scan.
pub fn scan_candidates(root: &Path) -> Result<CandidateSets, CoreError> {
    let metadata = std::fs::metadata(root).map_err(|e| CoreError::Scan {
        path: root.to_path_buf(),
        message: e.to_string(),
    })?;
    if !metadata.is_dir() {
        return Err(CoreError::Scan {
            path: root.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let mut sets = CandidateSets::default();

    // walkdir counts the root as depth 0 and its files as depth 1.
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(MAX_SCAN_DEPTH + 1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        if !is_regular_file(&entry) {
            continue;
        }

        let path = entry.path();
        let Some(kind) = MediaKind::from_path(path) else {
            continue;
        };
        let Some(basename) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };

        sets.insert(kind, basename, entry.into_path());
    }

    tracing::debug!(
        root = %root.display(),
        videos = sets.videos.len(),
        thumbnails = sets.thumbnails.len(),
        "Classified media candidates",
    );

    Ok(sets)
}

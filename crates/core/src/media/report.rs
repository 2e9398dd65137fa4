//! Serializable scan summary.

use std::path::Path;

use serde::Serialize;

use super::correlate::Correlation;

/// One video and, if found, its thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaEntry {
    /// Video basename.
    pub name: String,
    pub video_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_path: Option<String>,
    /// `true` iff `thumb_path` is set.
    pub has_thumb: bool,
}

impl MediaEntry {
    pub fn new(name: String, video_path: &Path, thumb_path: Option<&Path>) -> Self {
        let thumb_path = thumb_path
            .map(|p| p.to_string_lossy().into_owned())
            .filter(|p| !p.is_empty());

        Self {
            name,
            video_path: video_path.to_string_lossy().into_owned(),
            has_thumb: thumb_path.is_some(),
            thumb_path,
        }
    }
}

/// Result of one media scan, as returned by `GET /api/media`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub total_videos: usize,
    pub videos_with_thumbs: usize,
    pub media_files: Vec<MediaEntry>,
}

impl ScanReport {
    pub fn build(total_videos: usize, correlation: Correlation) -> Self {
        Self {
            total_videos,
            videos_with_thumbs: correlation.matched,
            media_files: correlation.entries,
        }
    }
}

//! Video/thumbnail correlation scan.
//!
//! A scan loads the optional alias table, walks the media root one level
//! deep, pairs every video with a `.webp` thumbnail and summarises the
//! result in a [`ScanReport`].

pub mod correlate;
pub mod mapping;
pub mod report;
pub mod scanner;

use std::path::Path;

use crate::error::CoreError;

pub use correlate::{correlate, Correlation};
pub use mapping::{load_alias_mapping, AliasMapping, MAPPING_FILE_NAME};
pub use report::{MediaEntry, ScanReport};
pub use scanner::{scan_candidates, CandidateSets, MAX_SCAN_DEPTH};

/// Run a full scan of `root` and build the report.
///
/// The only failure is a traversal error; a missing or broken alias table
/// just means no alias matches.
pub fn scan_media(root: &Path) -> Result<ScanReport, CoreError> {
    let mapping = load_alias_mapping(root);
    let candidates = scan_candidates(root)?;

    let total_videos = candidates.videos.len();
    let correlation = correlate(&candidates.videos, &candidates.thumbnails, &mapping);
    let report = ScanReport::build(total_videos, correlation);

    tracing::info!(
        root = %root.display(),
        total_videos = report.total_videos,
        videos_with_thumbs = report.videos_with_thumbs,
        "Media scan complete",
    );

    Ok(report)
}

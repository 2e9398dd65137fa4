//! Pairing videos with thumbnails.

use std::path::Path;

use super::mapping::AliasMapping;
use super::report::MediaEntry;
use super::scanner::CandidateSet;

/// Entries built for every video, plus how many of them got a thumbnail.
#[derive(Debug, Default)]
pub struct Correlation {
    pub entries: Vec<MediaEntry>,
    pub matched: usize,
}

/// Find the thumbnail for one video basename.
///
/// A thumbnail with the same basename always wins; the alias table is only
/// consulted when there is none.
pub fn find_thumbnail<'a>(
    basename: &str,
    thumbnails: &'a CandidateSet,
    mapping: &AliasMapping,
) -> Option<&'a Path> {
    if let Some(path) = thumbnails.get(basename) {
        return Some(path.as_path());
    }

    let alias = mapping.get(basename)?;
    thumbnails.get(alias).map(|path| path.as_path())
}

/// Build one [`MediaEntry`] per video, in basename order.
pub fn correlate(
    videos: &CandidateSet,
    thumbnails: &CandidateSet,
    mapping: &AliasMapping,
) -> Correlation {
    let mut correlation = Correlation {
        entries: Vec::with_capacity(videos.len()),
        matched: 0,
    };

    for (basename, video_path) in videos {
        let thumb = find_thumbnail(basename, thumbnails, mapping);
        let entry = MediaEntry::new(basename.clone(), video_path, thumb);
        if entry.has_thumb {
            correlation.matched += 1;
        }
        correlation.entries.push(entry);
    }

    correlation
}

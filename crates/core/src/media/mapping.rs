//! Optional alias table pairing a video basename with a differently named
//! thumbnail.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// File name of the alias table, looked up directly inside the media root.
pub const MAPPING_FILE_NAME: &str = "thumbnail_mapping.json";

/// Video basename -> thumbnail basename.
pub type AliasMapping = BTreeMap<String, String>;

/// Load `<root>/thumbnail_mapping.json`.
///
/// Never fails: a missing, unreadable or malformed file yields an empty
/// mapping. The file must be a flat JSON object whose values are all
/// strings; a single non-string value discards the whole table.
pub fn load_alias_mapping(root: &Path) -> AliasMapping {
    let path = root.join(MAPPING_FILE_NAME);

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No thumbnail mapping file");
            return AliasMapping::new();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read thumbnail mapping");
            return AliasMapping::new();
        }
    };

    match serde_json::from_str::<AliasMapping>(&contents) {
        Ok(mapping) => {
            tracing::debug!(path = %path.display(), aliases = mapping.len(), "Loaded thumbnail mapping");
            mapping
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed thumbnail mapping");
            AliasMapping::new()
        }
    }
}

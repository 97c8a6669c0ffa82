//! Recursive discovery and parsing of extension metadata files

use crate::error::{ScanError, ScanResult};
use crate::metadata::ExtensionMetadata;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// One discovered and parsed metadata file
#[derive(Debug, Clone)]
pub struct MetadataFile {
    /// Path of the JSON file
    pub path: PathBuf,
    /// Parsed record
    pub metadata: ExtensionMetadata,
}

/// Walk `root` recursively and parse every `*.json` file found.
///
/// Files are returned in sorted traversal order so repeated runs process
/// them deterministically. A missing root yields an empty list; any read or
/// parse failure is fatal.
pub fn scan_metadata_files(root: impl AsRef<Path>) -> ScanResult<Vec<MetadataFile>> {
    let root = root.as_ref();
    if !root.exists() {
        warn!("metadata directory does not exist: {}", root.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        debug!("reading metadata file: {}", path.display());
        let content = fs::read(path).map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let metadata =
            serde_json::from_slice(&content).map_err(|source| ScanError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        files.push(MetadataFile {
            path: path.to_path_buf(),
            metadata,
        });
    }

    Ok(files)
}

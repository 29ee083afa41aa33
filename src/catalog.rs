//! Video discovery: catalog files, folder scans and the demo fallback.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::{CatalogError, CatalogResult};
use crate::page::{Display, VideoCard};

/// Uploader recorded for videos found by a folder scan.
const LOCAL_UPLOADER: &str = "local";

/// Folder input definition used by the UI and settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderSource {
    /// Folder path to scan.
    pub path: PathBuf,
    /// Whether to include subfolders when scanning.
    pub include_subfolders: bool,
}

/// Video metadata as stored in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub filename: Option<PathBuf>,
    #[serde(default)]
    pub uploader: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

impl VideoRecord {
    /// Build a visible card from this record.
    pub fn into_card(self) -> VideoCard {
        VideoCard {
            id: self.id,
            title: self.title,
            description: self.description,
            uploader: self.uploader,
            views: self.views,
            uploaded_at: self.uploaded_at,
            filename: self.filename,
            display: Display::Block,
        }
    }
}

/// Read and validate a JSON catalog (an array of records).
pub fn load_catalog(path: &Path) -> CatalogResult<Vec<VideoRecord>> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<VideoRecord> =
        serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::new();
    for record in &records {
        if record.title.trim().is_empty() {
            return Err(CatalogError::MissingTitle {
                id: record.id.clone(),
            });
        }
        if !seen.insert(record.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                id: record.id.clone(),
            });
        }
    }
    tracing::debug!(path = %path.display(), count = records.len(), "catalog loaded");
    Ok(records)
}

/// Collect every supported video file under the given folders.
///
/// Unreadable folders and entries are logged and skipped.
pub fn scan_folders(folders: &[FolderSource]) -> Vec<VideoRecord> {
    let mut files = Vec::new();
    for folder in folders {
        let mut walker = WalkDir::new(&folder.path).follow_links(true);
        if !folder.include_subfolders {
            walker = walker.max_depth(1);
        }
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(folder = %folder.path.display(), "skipping during scan: {err}");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if is_supported_video(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    files.into_iter().filter_map(record_from_file).collect()
}

/// Return true for file extensions the gallery lists.
pub fn is_supported_video(path: &Path) -> bool {
    match path.extension().and_then(OsStr::to_str) {
        Some(ext) => matches!(
            ext.to_ascii_lowercase().as_str(),
            "mp4" | "mkv" | "webm" | "mov" | "avi" | "m4v"
        ),
        None => false,
    }
}

fn record_from_file(path: PathBuf) -> Option<VideoRecord> {
    let title = path.file_stem()?.to_string_lossy().trim().to_string();
    if title.is_empty() {
        return None;
    }
    Some(VideoRecord {
        id: path.to_string_lossy().to_string(),
        title,
        description: String::new(),
        filename: Some(path),
        uploader: LOCAL_UPLOADER.to_string(),
        views: 0,
        uploaded_at: None,
    })
}

/// Built-in entries shown when nothing else is available.
pub fn demo_videos() -> Vec<VideoRecord> {
    vec![
        VideoRecord {
            id: "demo1".to_string(),
            title: "Welcome to SnapStream".to_string(),
            description: "Demo video shown when no uploads exist".to_string(),
            filename: None,
            uploader: "snapstream".to_string(),
            views: 1200,
            uploaded_at: Some("01 Feb 2026".to_string()),
        },
        VideoRecord {
            id: "demo2".to_string(),
            title: "How SnapStream Works".to_string(),
            description: "Platform overview demo".to_string(),
            filename: None,
            uploader: "snapstream".to_string(),
            views: 860,
            uploaded_at: Some("02 Feb 2026".to_string()),
        },
    ]
}

/// Merge catalog and scanned videos, falling back to the demo entries.
pub fn collect(
    catalog: Option<&Path>,
    folders: &[FolderSource],
) -> CatalogResult<Vec<VideoRecord>> {
    let mut records = match catalog {
        Some(path) => load_catalog(path)?,
        None => Vec::new(),
    };
    records.extend(scan_folders(folders));

    // First occurrence wins when a scanned file repeats a catalog id.
    let mut seen = HashSet::new();
    records.retain(|record| seen.insert(record.id.clone()));

    if records.is_empty() {
        tracing::info!("no videos found, showing demo entries");
        return Ok(demo_videos());
    }
    Ok(records)
}

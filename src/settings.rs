//! Persistence model and configuration IO.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// File name used under the per-user config directory.
const SETTINGS_FILE: &str = "settings.json";

/// Serializable representation of a folder entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FolderSetting {
    /// Absolute folder path stored on disk.
    pub path: String,
    /// Whether subfolders should be scanned.
    pub include_subfolders: bool,
}

/// Settings persisted to `settings.json`.
///
/// The theme is not stored; every launch starts dark.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppSettings {
    /// Optional JSON catalog of curated videos.
    pub catalog_path: Option<String>,
    /// Folder list scanned for video files.
    pub folders: Vec<FolderSetting>,
}

/// Build the settings path and ensure the directory exists.
fn settings_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("dev", "snapstream", "snapstream_gallery")
        .ok_or_else(|| anyhow!("cannot determine config directory"))?;
    let config_dir = proj_dirs.config_dir();
    fs::create_dir_all(config_dir)?;
    Ok(config_dir.join(SETTINGS_FILE))
}

/// Load settings from disk, returning defaults when missing.
pub fn load() -> AppSettings {
    match settings_path() {
        Ok(path) => load_from(&path),
        Err(err) => {
            tracing::warn!("settings unavailable: {err:#}");
            AppSettings::default()
        }
    }
}

fn load_from(path: &Path) -> AppSettings {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return AppSettings::default(),
    };
    serde_json::from_str(&contents).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), "ignoring unreadable settings: {err}");
        AppSettings::default()
    })
}

/// Persist settings to disk as pretty JSON.
pub fn save(settings: &AppSettings) -> Result<()> {
    save_to(&settings_path()?, settings)
}

fn save_to(path: &Path, settings: &AppSettings) -> Result<()> {
    let contents = serde_json::to_string_pretty(settings)?;
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        let settings = AppSettings {
            catalog_path: Some("/videos/catalog.json".to_string()),
            folders: vec![FolderSetting {
                path: "/videos".to_string(),
                include_subfolders: true,
            }],
        };
        save_to(&path, &settings).unwrap();
        assert_eq!(load_from(&path), settings);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{"theme": "Light"}"#).unwrap();
        assert_eq!(load_from(&path), AppSettings::default());
    }

    #[test]
    fn missing_or_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        assert_eq!(load_from(&path), AppSettings::default());
        fs::write(&path, "[oops").unwrap();
        assert_eq!(load_from(&path), AppSettings::default());
    }
}

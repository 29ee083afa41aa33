//! Application runtime state derived from persisted settings.

use std::path::PathBuf;

use crate::catalog::FolderSource;
use crate::settings::{AppSettings, FolderSetting};

/// In-memory sources the gallery builds its cards from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Ordered list of folder inputs.
    pub folders: Vec<FolderSource>,
    /// Optional catalog file.
    pub catalog: Option<PathBuf>,
}

impl AppState {
    /// Build the runtime state from persisted settings.
    pub fn from_settings(settings: &AppSettings) -> Self {
        let folders = settings
            .folders
            .iter()
            .map(|folder| FolderSource {
                path: PathBuf::from(&folder.path),
                include_subfolders: folder.include_subfolders,
            })
            .collect();
        let catalog = settings.catalog_path.as_ref().map(PathBuf::from);

        Self { folders, catalog }
    }

    /// Copy the runtime state back into settings for persistence.
    pub fn apply_to_settings(&self, settings: &mut AppSettings) {
        settings.folders = self
            .folders
            .iter()
            .map(|folder| FolderSetting {
                path: folder.path.to_string_lossy().to_string(),
                include_subfolders: folder.include_subfolders,
            })
            .collect();
        settings.catalog_path = self
            .catalog
            .as_ref()
            .map(|path| path.to_string_lossy().to_string());
    }

    /// Append a folder unless it is already listed.
    pub fn add_folder(&mut self, path: PathBuf) -> bool {
        if self.folders.iter().any(|folder| folder.path == path) {
            return false;
        }
        self.folders.push(FolderSource {
            path,
            include_subfolders: true,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip() {
        let settings = AppSettings {
            catalog_path: Some("catalog.json".to_string()),
            folders: vec![FolderSetting {
                path: "clips".to_string(),
                include_subfolders: false,
            }],
        };
        let state = AppState::from_settings(&settings);
        assert_eq!(state.catalog, Some(PathBuf::from("catalog.json")));
        assert!(!state.folders[0].include_subfolders);

        let mut restored = AppSettings::default();
        state.apply_to_settings(&mut restored);
        assert_eq!(restored, settings);
    }

    #[test]
    fn add_folder_ignores_duplicates() {
        let mut state = AppState::default();
        assert!(state.add_folder(PathBuf::from("clips")));
        assert!(!state.add_folder(PathBuf::from("clips")));
        assert_eq!(state.folders.len(), 1);
    }
}

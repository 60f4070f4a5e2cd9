// SPDX-License-Identifier: MPL-2.0
//! Session state kept between runs in `state.cbor`.
//!
//! This is not user-editable and lives in the data directory, apart from
//! `settings.toml`. Load and save never fail hard: problems are reported as
//! notification keys.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.cbor";

/// State restored at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Directory of the last uploaded source image.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,

    /// Directory the last result was saved to.
    #[serde(default)]
    pub last_save_directory: Option<PathBuf>,

    /// Last target word, restored into the word field.
    #[serde(default)]
    pub last_word: Option<String>,
}

impl AppState {
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads state from `base_dir`, or from the resolved data directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = state_file_path(base_dir) else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "could not open state file");
                return (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                );
            }
        };

        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "could not parse state file");
                (
                    Self::default(),
                    Some("notification-state-parse-error".to_string()),
                )
            }
        }
    }

    /// Saves state, returning a notification key on failure.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = state_file_path(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-write-error".to_string());
            }
        }

        let written = fs::File::create(&path)
            .map_err(|e| e.to_string())
            .and_then(|file| {
                ciborium::into_writer(self, BufWriter::new(file)).map_err(|e| e.to_string())
            });
        match written {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "could not write state file");
                Some("notification-state-write-error".to_string())
            }
        }
    }

    pub fn set_last_open_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }

    pub fn set_last_save_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_save_directory = Some(parent.to_path_buf());
        }
    }
}

fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
        path.push(STATE_FILE);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn directories_come_from_file_parent() {
        let mut state = AppState::default();
        state.set_last_open_directory_from_file(Path::new("/home/user/refs/chrome.png"));
        state.set_last_save_directory_from_file(Path::new("/home/user/out/TypoClone-HI.png"));
        assert_eq!(
            state.last_open_directory,
            Some(PathBuf::from("/home/user/refs"))
        );
        assert_eq!(
            state.last_save_directory,
            Some(PathBuf::from("/home/user/out"))
        );
    }

    #[test]
    fn root_path_leaves_directory_unset() {
        let mut state = AppState::default();
        state.set_last_open_directory_from_file(Path::new("/"));
        assert!(state.last_open_directory.is_none());
    }

    #[test]
    fn save_then_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let original = AppState {
            last_open_directory: Some(PathBuf::from("/samples")),
            last_save_directory: Some(PathBuf::from("/renders")),
            last_word: Some("Velvet".to_string()),
        };
        assert!(original.save_to(Some(base_dir.clone())).is_none());
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, original);
    }

    #[test]
    fn missing_file_gives_default_without_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(state, AppState::default());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupt_file_gives_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), b"\xff\xff not cbor").expect("write");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(state, AppState::default());
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
    }
}

//! Persisted conference selection.
//!
//! The root component reads the stored id at start-up (off the main thread)
//! and writes it whenever the user picks or leaves a conference.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

pub trait SelectionStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, LoadError>;

    fn save(&self, conference_id: Option<&str>) -> Result<(), LoadError>;
}

#[derive(Default)]
pub struct MemorySelectionStore {
    selected: Mutex<Option<String>>,
}

impl MemorySelectionStore {
    pub fn new(selected: Option<&str>) -> Self {
        Self {
            selected: Mutex::new(selected.map(str::to_string)),
        }
    }
}

impl SelectionStore for MemorySelectionStore {
    fn load(&self) -> Result<Option<String>, LoadError> {
        Ok(self.selected.lock().clone())
    }

    fn save(&self, conference_id: Option<&str>) -> Result<(), LoadError> {
        *self.selected.lock() = conference_id.map(str::to_string);
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    #[serde(default)]
    selected_conference: Option<String>,
}

/// Selection kept in a small TOML file next to the config.
pub struct FileSelectionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// `<config_dir>/confetti/state.toml`.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("confetti").join("state.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: impl std::fmt::Display) -> LoadError {
        LoadError::Decode(format!("{}: {err}", self.path.display()))
    }
}

impl SelectionStore for FileSelectionStore {
    fn load(&self) -> Result<Option<String>, LoadError> {
        let _guard = self.lock.lock();
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let state: StateFile = toml::from_str(&content).map_err(|e| self.io_error(e))?;
        Ok(state.selected_conference)
    }

    fn save(&self, conference_id: Option<&str>) -> Result<(), LoadError> {
        let _guard = self.lock.lock();
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let state = StateFile {
            selected_conference: conference_id.map(str::to_string),
        };
        let content = toml::to_string(&state).map_err(|e| self.io_error(e))?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemorySelectionStore::default();
        assert_eq!(store.load().unwrap(), None);
        store.save(Some("devfest23")).unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("devfest23"));
        store.save(None).unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_store_missing_file_is_no_selection() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSelectionStore::new(dir.path().join("state.toml"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.toml");

        FileSelectionStore::new(&path)
            .save(Some("kotlinconf24"))
            .unwrap();

        let reopened = FileSelectionStore::new(&path);
        assert_eq!(reopened.load().unwrap().as_deref(), Some("kotlinconf24"));
    }

    #[test]
    fn file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        std::fs::write(&path, "selected_conference = [").unwrap();
        assert!(matches!(
            FileSelectionStore::new(&path).load(),
            Err(LoadError::Decode(_))
        ));
    }
}

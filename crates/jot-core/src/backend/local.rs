//! Local JSON file backend
//!
//! Each named collection lives in its own `<key>.json` file holding a JSON
//! array of note records, matching the original per-key storage layout
//! (`notes`, `ziply`, `recodes`, ...).

use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::PersistenceBackend;
use crate::error::{Error, Result};
use crate::models::{Note, NoteId};

/// Default collection key when none is configured.
pub const DEFAULT_COLLECTION: &str = "notes";

/// File-backed store for one note collection.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store for the named collection under `data_dir`.
    #[must_use]
    pub fn open(data_dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// Store bound to an explicit file path.
    #[must_use]
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_collection(&self) -> Result<Vec<Note>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_collection(&self, notes: &[Note]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(notes)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), count = notes.len(), "persisted collection");
        Ok(())
    }
}

impl PersistenceBackend for JsonFileStore {
    async fn load(&self) -> Result<Vec<Note>> {
        self.read_collection()
    }

    async fn insert(&self, note: &Note) -> Result<()> {
        let mut notes = self.read_collection()?;
        notes.push(note.clone());
        self.write_collection(&notes)
    }

    async fn update(&self, note: &Note) -> Result<()> {
        let mut notes = self.read_collection()?;
        let Some(slot) = notes.iter_mut().find(|stored| stored.id == note.id) else {
            return Err(Error::NotFound(note.id.to_string()));
        };
        *slot = note.clone();
        self.write_collection(&notes)
    }

    async fn remove(&self, id: &NoteId) -> Result<()> {
        let mut notes = self.read_collection()?;
        let Some(position) = notes.iter().position(|stored| stored.id == *id) else {
            return Err(Error::NotFound(id.to_string()));
        };
        notes.remove(position);
        self.write_collection(&notes)
    }
}

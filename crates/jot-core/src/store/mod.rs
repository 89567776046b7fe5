//! Note store
//!
//! `NoteStore` is the single source of truth for one note collection; all
//! mutation goes through it. Writes reach the backend before they are
//! committed to memory, so the in-memory sequence always equals the last
//! successfully persisted sequence.

use crate::backend::PersistenceBackend;
use crate::error::{Error, Result};
use crate::models::{Note, NoteId};
use crate::util::{normalize_field, unix_timestamp_ms};

/// Per-collection variant configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Titled collections require a title on add and search by title;
    /// content-only collections keep titles empty and search by content.
    pub has_title: bool,
    /// Render every entry expanded instead of tracking accordion state.
    pub default_expanded: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            has_title: true,
            default_expanded: false,
        }
    }
}

impl StoreOptions {
    /// Options for a title-less collection.
    #[must_use]
    pub const fn content_only() -> Self {
        Self {
            has_title: false,
            default_expanded: false,
        }
    }
}

/// Owner of one ordered note collection, persisted through a backend.
pub struct NoteStore<B: PersistenceBackend> {
    backend: B,
    options: StoreOptions,
    notes: Vec<Note>,
}

impl<B: PersistenceBackend> NoteStore<B> {
    /// Create an empty store over the given backend. Call [`Self::load`] to
    /// populate it from persisted state.
    pub const fn new(backend: B, options: StoreOptions) -> Self {
        Self {
            backend,
            options,
            notes: Vec::new(),
        }
    }

    /// Replace the in-memory collection from the backend.
    ///
    /// On failure the previous in-memory state is kept and the error is
    /// surfaced to the caller; there is no retry.
    pub async fn load(&mut self) -> Result<()> {
        let notes = self.backend.load().await?;
        tracing::debug!(count = notes.len(), "loaded collection");
        self.notes = notes;
        Ok(())
    }

    /// The collection in display order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    #[must_use]
    pub const fn options(&self) -> StoreOptions {
        self.options
    }

    /// Look up a note by its stable id.
    #[must_use]
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == *id)
    }

    /// Look up a note by its position in the unfiltered collection.
    pub fn note_at(&self, index: usize) -> Result<&Note> {
        self.notes
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.notes.len()))
    }

    /// Append a new note.
    ///
    /// Guard-then-skip: an empty content (or empty title in a titled
    /// collection) makes this a silent no-op returning `Ok(None)`.
    pub async fn add(&mut self, title: &str, content: &str) -> Result<Option<NoteId>> {
        let Some((title, content)) = self.normalize_fields(title, content) else {
            tracing::debug!("add skipped: empty required field");
            return Ok(None);
        };

        let note = Note::new(title, content);
        self.backend.insert(&note).await?;

        let id = note.id;
        self.notes.push(note);
        Ok(Some(id))
    }

    /// Replace both fields of the note with the given id.
    ///
    /// The guard-then-skip rule applies to the replacement fields; a skipped
    /// update leaves the note unchanged and returns `Ok(None)`.
    pub async fn update(&mut self, id: &NoteId, title: &str, content: &str) -> Result<Option<Note>> {
        let position = self
            .position_of(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        let Some((title, content)) = self.normalize_fields(title, content) else {
            tracing::debug!(%id, "update skipped: empty required field");
            return Ok(None);
        };

        let mut candidate = self.notes[position].clone();
        candidate.title = title;
        candidate.content = content;
        candidate.updated_at = unix_timestamp_ms();

        self.backend.update(&candidate).await?;
        self.notes[position] = candidate.clone();
        Ok(Some(candidate))
    }

    /// Positional form of [`Self::update`]. Fails with `IndexOutOfRange`
    /// before touching anything when the index is stale.
    pub async fn update_at(
        &mut self,
        index: usize,
        title: &str,
        content: &str,
    ) -> Result<Option<Note>> {
        let id = self.note_at(index)?.id;
        self.update(&id, title, content).await
    }

    /// Remove the note with the given id; returns the removed note.
    pub async fn delete(&mut self, id: &NoteId) -> Result<Note> {
        let position = self
            .position_of(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        self.backend.remove(id).await?;
        Ok(self.notes.remove(position))
    }

    /// Positional form of [`Self::delete`].
    pub async fn delete_at(&mut self, index: usize) -> Result<Note> {
        let id = self.note_at(index)?.id;
        self.delete(&id).await
    }

    /// Clipboard payload for the note with the given id: the content,
    /// title-prefixed for titled collections with a non-empty title.
    pub fn copy_content(&self, id: &NoteId) -> Result<String> {
        let note = self
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        Ok(self.copy_payload(note))
    }

    /// Positional form of [`Self::copy_content`].
    pub fn copy_content_at(&self, index: usize) -> Result<String> {
        let note = self.note_at(index)?;
        Ok(self.copy_payload(note))
    }

    fn copy_payload(&self, note: &Note) -> String {
        if self.options.has_title && !note.title.is_empty() {
            format!("{}\n\n{}", note.title, note.content)
        } else {
            note.content.clone()
        }
    }

    fn position_of(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == *id)
    }

    fn normalize_fields(&self, title: &str, content: &str) -> Option<(String, String)> {
        let content = normalize_field(content)?;
        let title = if self.options.has_title {
            normalize_field(title)?
        } else {
            String::new()
        };
        Some((title, content))
    }
}

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] jot_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No note content provided")]
    EmptyContent,
    #[error("Edited note content cannot be empty")]
    EmptyEditedContent,
    #[error("Note reference cannot be empty")]
    EmptyNoteRef,
    #[error("Search query cannot be empty")]
    EmptySearchQuery,
    #[error("This collection is titled; pass --title (or use --content-only)")]
    TitleRequired,
    #[error("Note not found for ref: {0}")]
    NoteNotFound(String),
    #[error("{0}")]
    AmbiguousNoteRef(String),
    #[error("Invalid positional reference: {0}")]
    InvalidIndex(String),
    #[error("Editor command failed: {0}")]
    EditorFailed(String),
}

//! jot-core - Core library for jot
//!
//! This crate contains the note model, the store that owns a collection,
//! the persistence backends it writes through, and the filtered view used
//! by all jot interfaces (CLI, API).

pub mod backend;
pub mod error;
pub mod models;
pub mod store;
pub mod util;
pub mod view;

pub use backend::{HttpStore, JsonFileStore, PersistenceBackend};
pub use error::{Error, Result};
pub use models::{Note, NoteId};
pub use store::{NoteStore, StoreOptions};
pub use view::{compute_view, Accordion, ViewEntry};

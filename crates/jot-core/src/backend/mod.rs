//! Persistence backends for note collections
//!
//! A backend owns nothing; it is the storage/transport a `NoteStore` writes
//! through. Two implementations ship with the crate: a local JSON file per
//! collection key and a remote HTTP endpoint.

mod local;
mod remote;

pub use local::{JsonFileStore, DEFAULT_COLLECTION};
pub use remote::{AckEnvelope, FetchEnvelope, HttpStore, DEFAULT_HTTP_TIMEOUT};

use crate::error::Result;
use crate::models::{Note, NoteId};

/// Storage operations a note collection is persisted through.
///
/// Ordering contract: a `load` issued after a completed write (`insert`,
/// `update`, `remove`) must observe that write's effect. Implementations
/// serialize writes per collection to honor this.
#[allow(async_fn_in_trait)]
pub trait PersistenceBackend {
    /// Fetch the persisted collection. An absent collection is an empty
    /// collection, not an error.
    async fn load(&self) -> Result<Vec<Note>>;

    /// Append one note to the persisted collection.
    async fn insert(&self, note: &Note) -> Result<()>;

    /// Replace the persisted record with the same id.
    async fn update(&self, note: &Note) -> Result<()>;

    /// Remove the persisted record with the given id.
    async fn remove(&self, id: &NoteId) -> Result<()>;
}

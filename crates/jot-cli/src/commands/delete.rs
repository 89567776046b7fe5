use jot_core::{NoteStore, PersistenceBackend};

use crate::commands::common::resolve_note_ref;
use crate::error::CliError;

pub async fn run_delete<B: PersistenceBackend>(
    store: &mut NoteStore<B>,
    reference: &str,
) -> Result<(), CliError> {
    let id = resolve_note_ref(store, reference)?;
    let removed = store.delete(&id).await?;
    println!("{}", removed.id);
    Ok(())
}

use jot_core::{NoteStore, PersistenceBackend};

use crate::commands::common::resolve_note_ref;
use crate::error::CliError;

pub fn run_copy<B: PersistenceBackend>(
    store: &NoteStore<B>,
    reference: &str,
) -> Result<(), CliError> {
    let id = resolve_note_ref(store, reference)?;
    println!("{}", store.copy_content(&id)?);
    Ok(())
}

use jot_core::{NoteStore, PersistenceBackend};

use crate::commands::common::{
    capture_editor_input_with_initial, normalize_content, resolve_note_ref,
};
use crate::error::CliError;

pub async fn run_edit<B: PersistenceBackend>(
    store: &mut NoteStore<B>,
    reference: &str,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<(), CliError> {
    let id = resolve_note_ref(store, reference)?;
    let current = store
        .get(&id)
        .ok_or_else(|| CliError::NoteNotFound(id.to_string()))?
        .clone();

    let edited_content = match content {
        Some(text) => normalize_content(text).ok_or(CliError::EmptyEditedContent)?,
        None => capture_editor_input_with_initial(&current.content)?
            .ok_or(CliError::EmptyEditedContent)?,
    };
    let edited_title = title.map_or_else(|| current.title.clone(), str::to_string);

    if edited_title == current.title && edited_content == current.content {
        println!("{id}");
        return Ok(());
    }

    if let Some(updated) = store.update(&id, &edited_title, &edited_content).await? {
        println!("{}", updated.id);
    }
    Ok(())
}

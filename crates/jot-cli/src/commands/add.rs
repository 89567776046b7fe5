use jot_core::{NoteStore, PersistenceBackend};

use crate::commands::common::resolve_note_content;
use crate::error::CliError;

pub async fn run_add<B: PersistenceBackend>(
    store: &mut NoteStore<B>,
    title: Option<&str>,
    content_parts: &[String],
) -> Result<(), CliError> {
    let content = resolve_note_content(content_parts)?;

    let title = title.map(str::trim).unwrap_or_default();
    if store.options().has_title && title.is_empty() {
        return Err(CliError::TitleRequired);
    }

    if let Some(id) = store.add(title, &content).await? {
        println!("{id}");
    }
    Ok(())
}

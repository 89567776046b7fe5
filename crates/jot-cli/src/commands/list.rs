use jot_core::view::{compute_view, Accordion};
use jot_core::{NoteStore, PersistenceBackend};

use crate::commands::common::{format_view_lines, resolve_note_ref, view_to_items};
use crate::error::CliError;

pub fn run_list<B: PersistenceBackend>(
    store: &NoteStore<B>,
    query: Option<&str>,
    expand: Option<&str>,
    inline: bool,
    as_json: bool,
) -> Result<(), CliError> {
    let mut accordion = Accordion::new();
    if let Some(reference) = expand {
        accordion.toggle(resolve_note_ref(store, reference)?);
    }

    let mut options = store.options();
    if inline {
        options.default_expanded = true;
    }

    let view = compute_view(store.notes(), query.unwrap_or(""), &accordion, options);
    let items = view_to_items(&view);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for line in format_view_lines(&items) {
            println!("{line}");
        }
    }

    Ok(())
}

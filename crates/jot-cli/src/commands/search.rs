use jot_core::{NoteStore, PersistenceBackend};

use crate::commands::common::normalize_search_query;
use crate::commands::list::run_list;
use crate::error::CliError;

pub fn run_search<B: PersistenceBackend>(
    store: &NoteStore<B>,
    query: &str,
    as_json: bool,
) -> Result<(), CliError> {
    let normalized_query = normalize_search_query(query)?;
    run_list(store, Some(&normalized_query), None, false, as_json)
}

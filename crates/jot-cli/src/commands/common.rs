use std::env;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use jot_core::view::ViewEntry;
use jot_core::{NoteId, NoteStore, PersistenceBackend};
use serde::Serialize;

use crate::error::CliError;

/// Serializable render-model entry for `--json` output.
#[derive(Debug, Serialize)]
pub struct ViewItem {
    pub original_index: usize,
    pub id: String,
    pub title: String,
    pub content: String,
    pub header: String,
    pub expanded: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub relative_time: String,
}

pub const HEADER_PREVIEW_CHARS: usize = 40;

pub fn view_to_items(view: &[ViewEntry<'_>]) -> Vec<ViewItem> {
    let now_ms = chrono::Utc::now().timestamp_millis();
    view.iter()
        .map(|entry| ViewItem {
            original_index: entry.original_index,
            id: entry.note.id.to_string(),
            title: entry.note.title.clone(),
            content: entry.note.content.clone(),
            header: entry.note.header(HEADER_PREVIEW_CHARS),
            expanded: entry.expanded,
            created_at: entry.note.created_at,
            updated_at: entry.note.updated_at,
            relative_time: format_relative_time(entry.note.updated_at, now_ms),
        })
        .collect()
}

/// Render one line per collapsed entry, with the content block indented
/// underneath expanded ones.
pub fn format_view_lines(items: &[ViewItem]) -> Vec<String> {
    let mut lines = Vec::new();
    for item in items {
        lines.push(format!(
            "{:>3}  {}  {}  ({})",
            item.original_index,
            short_id(&item.id),
            item.header,
            item.relative_time
        ));
        if item.expanded {
            for content_line in item.content.lines() {
                lines.push(format!("     {content_line}"));
            }
        }
    }
    lines
}

pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);
    let minute = 60_000;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;

    if diff < minute {
        "just now".to_string()
    } else if diff < hour {
        format!("{}m ago", diff / minute)
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else {
        format!("{}w ago", diff / week)
    }
}

/// Resolve a user-supplied note ref against the loaded collection.
///
/// Accepted forms: a full note id, a unique id prefix, or `#N` addressing
/// position N of the unfiltered collection. Ambiguous prefixes and stale
/// indices are reported, never guessed.
pub fn resolve_note_ref<B: PersistenceBackend>(
    store: &NoteStore<B>,
    reference: &str,
) -> Result<NoteId, CliError> {
    let normalized = normalize_note_ref(reference)?;

    if let Some(index_text) = normalized.strip_prefix('#') {
        let index: usize = index_text
            .parse()
            .map_err(|_| CliError::InvalidIndex(normalized.clone()))?;
        return Ok(store.note_at(index)?.id);
    }

    if let Ok(id) = normalized.parse::<NoteId>() {
        if store.get(&id).is_some() {
            return Ok(id);
        }
        return Err(CliError::NoteNotFound(normalized));
    }

    let matches: Vec<NoteId> = store
        .notes()
        .iter()
        .filter(|note| note.id.to_string().starts_with(&normalized))
        .map(|note| note.id)
        .collect();

    match matches.len() {
        0 => Err(CliError::NoteNotFound(normalized)),
        1 => Ok(matches[0]),
        _ => {
            let options = matches
                .iter()
                .map(|id| short_id(&id.to_string()))
                .collect::<Vec<String>>()
                .join(", ");
            Err(CliError::AmbiguousNoteRef(format!(
                "ID prefix '{normalized}' is ambiguous; matches: {options}"
            )))
        }
    }
}

pub fn normalize_note_ref(reference: &str) -> Result<String, CliError> {
    let trimmed = reference.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyNoteRef)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn normalize_search_query(query: &str) -> Result<String, CliError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptySearchQuery)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn normalize_content(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Content resolution chain for `add`: arguments, then piped stdin, then an
/// interactive editor.
pub fn resolve_note_content(content_parts: &[String]) -> Result<String, CliError> {
    if let Some(content) = normalize_content(&content_parts.join(" ")) {
        return Ok(content);
    }

    if let Some(content) = read_piped_stdin()? {
        return Ok(content);
    }

    if let Some(content) = capture_editor_input()? {
        return Ok(content);
    }

    Err(CliError::EmptyContent)
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_content(&buffer))
}

pub fn capture_editor_input() -> Result<Option<String>, CliError> {
    capture_editor_input_with_initial("")
}

pub fn capture_editor_input_with_initial(
    initial_content: &str,
) -> Result<Option<String>, CliError> {
    let editor = preferred_editor();
    let temp_file = create_temp_note_file_path();
    std::fs::write(&temp_file, initial_content)?;

    let launch_result = launch_editor(&editor, &temp_file);
    let note_content = std::fs::read_to_string(&temp_file)?;
    let _ = std::fs::remove_file(&temp_file);

    launch_result?;
    Ok(normalize_content(&note_content))
}

fn launch_editor(editor: &str, file_path: &Path) -> Result<(), CliError> {
    match Command::new(editor).arg(file_path).status() {
        Ok(status) => {
            if status.success() {
                Ok(())
            } else {
                Err(CliError::EditorFailed(format!(
                    "`{editor}` exited with status {status}"
                )))
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            // Fallback for editor commands with args, e.g. "code --wait"
            let mut parts = editor.split_whitespace();
            let Some(program) = parts.next() else {
                return Err(CliError::EditorFailed("empty EDITOR command".into()));
            };

            let mut command = Command::new(program);
            command.args(parts).arg(file_path);

            let status = command.status()?;
            if status.success() {
                Ok(())
            } else {
                Err(CliError::EditorFailed(format!(
                    "`{editor}` exited with status {status}"
                )))
            }
        }
        Err(err) => Err(CliError::Io(err)),
    }
}

fn preferred_editor() -> String {
    env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .unwrap_or_else(|_| default_editor().to_string())
}

pub const fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "vi"
    }
}

fn create_temp_note_file_path() -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_nanos());
    env::temp_dir().join(format!("jot-note-{}-{now}.md", std::process::id()))
}

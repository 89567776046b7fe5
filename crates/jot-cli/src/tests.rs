use jot_core::view::{compute_view, Accordion};
use jot_core::{Error, JsonFileStore, NoteStore, StoreOptions};
use pretty_assertions::assert_eq;

use crate::commands::add::run_add;
use crate::commands::common::{
    default_editor, format_relative_time, format_view_lines, normalize_content,
    normalize_note_ref, normalize_search_query, resolve_note_ref, short_id, view_to_items,
};
use crate::commands::copy::run_copy;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::error::CliError;

fn titled_store(dir: &tempfile::TempDir) -> NoteStore<JsonFileStore> {
    NoteStore::new(
        JsonFileStore::open(dir.path(), "notes"),
        StoreOptions::default(),
    )
}

async fn seeded_store(dir: &tempfile::TempDir) -> NoteStore<JsonFileStore> {
    let mut store = titled_store(dir);
    store.add("Groceries", "milk and eggs").await.unwrap();
    store.add("Standup", "demo the filter").await.unwrap();
    store
}

#[test]
fn normalize_content_trims_and_rejects_empty() {
    assert_eq!(normalize_content("  hello  "), Some("hello".to_string()));
    assert_eq!(normalize_content(" \n\t "), None);
}

#[test]
fn normalize_content_keeps_multiline_text() {
    assert_eq!(
        normalize_content("line 1\nline 2\n"),
        Some("line 1\nline 2".to_string())
    );
}

#[test]
fn default_editor_is_defined() {
    assert!(!default_editor().is_empty());
}

#[test]
fn normalize_note_ref_rejects_empty() {
    assert!(matches!(normalize_note_ref("  "), Err(CliError::EmptyNoteRef)));
    assert_eq!(normalize_note_ref(" #0 ").unwrap(), "#0");
}

#[test]
fn normalize_search_query_rejects_empty() {
    assert!(matches!(
        normalize_search_query("\t"),
        Err(CliError::EmptySearchQuery)
    ));
    assert_eq!(normalize_search_query(" milk ").unwrap(), "milk");
}

#[test]
fn format_relative_time_units() {
    let now = 10_000_000_000;
    assert_eq!(format_relative_time(now - 30_000, now), "just now");
    assert_eq!(format_relative_time(now - 120_000, now), "2m ago");
    assert_eq!(format_relative_time(now - 2 * 60 * 60_000, now), "2h ago");
    assert_eq!(format_relative_time(now - 3 * 24 * 60 * 60_000, now), "3d ago");
}

#[test]
fn short_id_keeps_the_leading_characters() {
    assert_eq!(short_id("0198a3f2-1234-7abc-8def-0123456789ab"), "0198a3f2");
}

#[tokio::test]
async fn format_view_lines_indents_expanded_content() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;

    let mut accordion = Accordion::new();
    accordion.toggle(store.notes()[0].id);

    let view = compute_view(store.notes(), "", &accordion, store.options());
    let lines = format_view_lines(&view_to_items(&view));

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Groceries"));
    assert_eq!(lines[1], "     milk and eggs");
    assert!(lines[2].contains("Standup"));
}

#[tokio::test]
async fn resolve_note_ref_accepts_positional_form() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;

    let id = resolve_note_ref(&store, "#1").unwrap();
    assert_eq!(id, store.notes()[1].id);

    let error = resolve_note_ref(&store, "#9").unwrap_err();
    assert!(matches!(
        error,
        CliError::Core(Error::IndexOutOfRange { index: 9, len: 2 })
    ));

    let error = resolve_note_ref(&store, "#abc").unwrap_err();
    assert!(matches!(error, CliError::InvalidIndex(_)));
}

#[tokio::test]
async fn resolve_note_ref_accepts_full_id_and_unique_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;

    let full = store.notes()[0].id.to_string();
    assert_eq!(resolve_note_ref(&store, &full).unwrap(), store.notes()[0].id);

    // Drop the last character: still unique against the other id.
    let prefix = &full[..full.len() - 1];
    assert_eq!(
        resolve_note_ref(&store, prefix).unwrap(),
        store.notes()[0].id
    );
}

#[tokio::test]
async fn resolve_note_ref_reports_ambiguity_and_misses() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;

    // UUID v7 ids share their leading timestamp characters.
    let error = resolve_note_ref(&store, "0").unwrap_err();
    assert!(matches!(error, CliError::AmbiguousNoteRef(_)));

    let error = resolve_note_ref(&store, "zzzz").unwrap_err();
    assert!(matches!(error, CliError::NoteNotFound(_)));
}

#[tokio::test]
async fn run_add_stores_and_persists_the_note() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = titled_store(&dir);
    store.load().await.unwrap();

    run_add(
        &mut store,
        Some("Groceries"),
        &["milk".to_string(), "and".to_string(), "eggs".to_string()],
    )
    .await
    .unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.notes()[0].content, "milk and eggs");

    // A fresh store over the same file sees the note.
    let mut reloaded = titled_store(&dir);
    reloaded.load().await.unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.notes()[0].title, "Groceries");
}

#[tokio::test]
async fn run_add_requires_a_title_for_titled_collections() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = titled_store(&dir);

    let error = run_add(&mut store, None, &["content".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(error, CliError::TitleRequired));
    assert!(store.is_empty());
}

#[tokio::test]
async fn quick_capture_works_for_content_only_collections() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = NoteStore::new(
        JsonFileStore::open(dir.path(), "recodes"),
        StoreOptions::content_only(),
    );

    run_add(&mut store, None, &["fleeting thought".to_string()])
        .await
        .unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.notes()[0].title, "");
}

#[tokio::test]
async fn run_edit_with_content_flag_keeps_the_title() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = seeded_store(&dir).await;
    let id = store.notes()[0].id;

    run_edit(&mut store, "#0", None, Some("oat milk"))
        .await
        .unwrap();

    let note = store.get(&id).unwrap();
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.content, "oat milk");
}

#[tokio::test]
async fn run_edit_rejects_empty_replacement_content() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = seeded_store(&dir).await;

    let error = run_edit(&mut store, "#0", None, Some("   "))
        .await
        .unwrap_err();
    assert!(matches!(error, CliError::EmptyEditedContent));
    assert_eq!(store.notes()[0].content, "milk and eggs");
}

#[tokio::test]
async fn run_edit_without_changes_leaves_the_note_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = seeded_store(&dir).await;
    let before = store.notes()[0].clone();

    run_edit(&mut store, "#0", None, Some("milk and eggs"))
        .await
        .unwrap();
    assert_eq!(store.notes()[0], before);
}

#[tokio::test]
async fn run_delete_removes_the_addressed_note() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = seeded_store(&dir).await;
    let survivor = store.notes()[1].id;

    run_delete(&mut store, "#0").await.unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.notes()[0].id, survivor);

    let error = run_delete(&mut store, "#1").await.unwrap_err();
    assert!(matches!(
        error,
        CliError::Core(Error::IndexOutOfRange { .. })
    ));
}

#[tokio::test]
async fn run_copy_resolves_the_reference() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;

    run_copy(&store, "#0").unwrap();

    let id = store.notes()[0].id;
    assert_eq!(
        store.copy_content(&id).unwrap(),
        "Groceries\n\nmilk and eggs"
    );
}

//! Filtered render model
//!
//! Translates a note collection plus a search query into the sequence the UI
//! renders. Entries carry their position in the *unfiltered* collection:
//! that original index is what positional UI actions are resolved against,
//! so it must never be the filtered position.

use crate::models::{Note, NoteId};
use crate::store::StoreOptions;

/// One renderable list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry<'a> {
    /// Position in the unfiltered collection.
    pub original_index: usize,
    pub note: &'a Note,
    pub expanded: bool,
}

/// Expand/collapse state: at most one entry is expanded at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<NoteId>,
}

impl Accordion {
    #[must_use]
    pub const fn new() -> Self {
        Self { expanded: None }
    }

    /// Expand the target entry, collapsing any other; toggling the expanded
    /// entry collapses it.
    pub fn toggle(&mut self, id: NoteId) {
        if self.expanded == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id);
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded = None;
    }

    #[must_use]
    pub fn is_expanded(&self, id: &NoteId) -> bool {
        self.expanded == Some(*id)
    }

    #[must_use]
    pub const fn expanded(&self) -> Option<NoteId> {
        self.expanded
    }

    /// Drop state pointing at a note no longer in the collection.
    pub fn prune(&mut self, notes: &[Note]) {
        if let Some(id) = self.expanded {
            if !notes.iter().any(|note| note.id == id) {
                self.expanded = None;
            }
        }
    }
}

/// Compute the filtered render model.
///
/// The query matches case-insensitively as a substring of the title for
/// titled collections, of the content for content-only ones. An empty or
/// whitespace query is the identity filter: every note, original order.
#[must_use]
pub fn compute_view<'a>(
    notes: &'a [Note],
    query: &str,
    accordion: &Accordion,
    options: StoreOptions,
) -> Vec<ViewEntry<'a>> {
    let needle = query.trim().to_lowercase();

    notes
        .iter()
        .enumerate()
        .filter(|(_, note)| {
            if needle.is_empty() {
                return true;
            }
            searchable_field(note, options).to_lowercase().contains(&needle)
        })
        .map(|(original_index, note)| ViewEntry {
            original_index,
            note,
            expanded: options.default_expanded || accordion.is_expanded(&note.id),
        })
        .collect()
}

fn searchable_field(note: &Note, options: StoreOptions) -> &str {
    if options.has_title {
        &note.title
    } else {
        &note.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_notes() -> Vec<Note> {
        vec![
            Note::new("Alpha", "first body"),
            Note::new("Beta", "second body"),
            Note::new("alphabet", "third body"),
        ]
    }

    #[test]
    fn empty_query_is_the_identity_filter() {
        let notes = sample_notes();
        let view = compute_view(&notes, "", &Accordion::new(), StoreOptions::default());

        assert_eq!(view.len(), notes.len());
        for (position, entry) in view.iter().enumerate() {
            assert_eq!(entry.original_index, position);
            assert_eq!(entry.note.id, notes[position].id);
            assert!(!entry.expanded);
        }

        // Whitespace-only queries behave the same.
        let view = compute_view(&notes, "   ", &Accordion::new(), StoreOptions::default());
        assert_eq!(view.len(), notes.len());
    }

    #[test]
    fn query_filters_titles_case_insensitively() {
        let notes = sample_notes();
        let view = compute_view(&notes, "ALPHA", &Accordion::new(), StoreOptions::default());

        let indices: Vec<usize> = view.iter().map(|entry| entry.original_index).collect();
        assert_eq!(indices, vec![0, 2]);
        for entry in &view {
            assert!(entry.note.title.to_lowercase().contains("alpha"));
        }
    }

    #[test]
    fn original_index_survives_filtering() {
        let notes = sample_notes();
        let view = compute_view(&notes, "beta", &Accordion::new(), StoreOptions::default());

        // "Beta" sits at position 1 of the backing collection even though it
        // is the only (first) entry of the filtered view.
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].original_index, 1);
        assert_eq!(notes[view[0].original_index].title, "Beta");
    }

    #[test]
    fn content_only_collections_filter_by_content() {
        let notes = vec![Note::new("", "milk and eggs"), Note::new("", "call mom")];
        let view = compute_view(
            &notes,
            "MILK",
            &Accordion::new(),
            StoreOptions::content_only(),
        );
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].original_index, 0);
    }

    #[test]
    fn accordion_allows_at_most_one_expanded_entry() {
        let notes = sample_notes();
        let mut accordion = Accordion::new();

        accordion.toggle(notes[0].id);
        accordion.toggle(notes[2].id);
        accordion.toggle(notes[1].id);

        let view = compute_view(&notes, "", &accordion, StoreOptions::default());
        let expanded: Vec<usize> = view
            .iter()
            .filter(|entry| entry.expanded)
            .map(|entry| entry.original_index)
            .collect();
        assert_eq!(expanded, vec![1]);
    }

    #[test]
    fn toggling_the_expanded_entry_collapses_it() {
        let notes = sample_notes();
        let mut accordion = Accordion::new();

        accordion.toggle(notes[1].id);
        assert!(accordion.is_expanded(&notes[1].id));
        accordion.toggle(notes[1].id);
        assert_eq!(accordion.expanded(), None);

        accordion.toggle(notes[0].id);
        accordion.collapse_all();
        assert_eq!(accordion.expanded(), None);
    }

    #[test]
    fn prune_drops_state_for_deleted_notes() {
        let mut notes = sample_notes();
        let mut accordion = Accordion::new();
        accordion.toggle(notes[0].id);

        notes.remove(0);
        accordion.prune(&notes);
        assert_eq!(accordion.expanded(), None);

        accordion.toggle(notes[0].id);
        accordion.prune(&notes);
        assert!(accordion.is_expanded(&notes[0].id));
    }

    #[test]
    fn default_expanded_renders_everything_inline() {
        let notes = sample_notes();
        let options = StoreOptions {
            has_title: true,
            default_expanded: true,
        };
        let view = compute_view(&notes, "", &Accordion::new(), options);
        assert!(view.iter().all(|entry| entry.expanded));
    }
}

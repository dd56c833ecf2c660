// src/application/query_engine.rs
use crate::constants::ALL_CATEGORY;
use crate::domain::Note;

/// Filter over the note list: free-text search plus category selection.
///
/// Search is a case-insensitive substring match on title or content. The
/// category must match exactly unless it is [`ALL_CATEGORY`]. Holds no state
/// besides its inputs; input order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEngine {
    search: String,
    category: String,
}

impl QueryEngine {
    pub fn new(search_query: &str, selected_category: &str) -> Self {
        Self {
            search: search_query.to_lowercase(),
            category: selected_category.to_string(),
        }
    }

    /// Query that keeps every note
    pub fn everything() -> Self {
        Self::new("", ALL_CATEGORY)
    }

    pub fn is_searching(&self) -> bool {
        !self.search.is_empty()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn matches(&self, note: &Note) -> bool {
        let text_matches = !self.is_searching()
            || note.title.to_lowercase().contains(&self.search)
            || note.content.to_lowercase().contains(&self.search);
        let category_matches = self.category == ALL_CATEGORY || note.category == self.category;
        text_matches && category_matches
    }

    pub fn apply<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        notes.iter().filter(|note| self.matches(note)).collect()
    }
}

/// Shorthand for `QueryEngine::new(search_query, selected_category).apply(notes)`
pub fn filter_notes<'a>(
    notes: &'a [Note],
    search_query: &str,
    selected_category: &str,
) -> Vec<&'a Note> {
    QueryEngine::new(search_query, selected_category).apply(notes)
}

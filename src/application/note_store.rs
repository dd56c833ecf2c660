// src/application/note_store.rs
use crate::application::QueryEngine;
use crate::constants::{ALL_CATEGORY, EDITED_SUFFIX, TIMESTAMP_FORMAT, UNCATEGORIZED};
use crate::domain::{Categories, DomainError, EditDraft, Note, NoteDraft};
use chrono::{Local, Utc};
use tracing::{debug, info, instrument};

/// Everything the store persists
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredState {
    pub notes: Vec<Note>,
    pub categories: Categories,
}

pub trait NoteRepository {
    /// Read persisted state. Missing or malformed data yields defaults,
    /// never an error.
    fn load(&mut self) -> StoredState;

    /// Write notes and categories as one unit
    fn save(&mut self, notes: &[Note], categories: &Categories) -> Result<(), DomainError>;
}

/// Single owner of the note list and the category list.
///
/// Every successful mutation is followed by a full save of both collections.
/// Rejected mutations (blank text, unknown id, duplicate category) are silent
/// no-ops and do not touch storage. A failing save is returned as
/// [`DomainError::Storage`]; the in-memory state keeps the mutation.
pub struct NoteStore<R: NoteRepository> {
    repository: R,
    notes: Vec<Note>,
    categories: Categories,
    active_filter: String,
    last_id: i64,
}

impl<R: NoteRepository> NoteStore<R> {
    pub fn new(mut repository: R) -> Self {
        let StoredState { notes, categories } = repository.load();
        let last_id = notes.iter().map(|n| n.id).max().unwrap_or(0);
        info!(
            notes = notes.len(),
            categories = categories.len(),
            "Hydrated note store"
        );
        Self {
            repository,
            notes,
            categories,
            active_filter: ALL_CATEGORY.to_string(),
            last_id,
        }
    }

    /// All notes, newest first
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: i64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn categories(&self) -> &[String] {
        self.categories.as_slice()
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Make `name` the active filter. Unknown categories are ignored.
    pub fn select_category(&mut self, name: &str) -> bool {
        if !self.categories.contains(name) {
            debug!(category = name, "Ignoring selection of unknown category");
            return false;
        }
        self.active_filter = name.to_string();
        true
    }

    /// Notes matching `search_query` under the active filter
    pub fn view(&self, search_query: &str) -> Vec<&Note> {
        QueryEngine::new(search_query, &self.active_filter).apply(&self.notes)
    }

    #[instrument(level = "debug", skip(self, draft), fields(draft = %draft.id()))]
    pub fn create(&mut self, draft: NoteDraft) -> Result<Option<Note>, DomainError> {
        if draft.is_blank() {
            debug!("Ignoring blank note draft");
            return Ok(None);
        }

        let selected = draft.category.as_deref().unwrap_or(self.active_filter.as_str());
        let category = resolve_category(selected);
        let note = Note {
            id: self.next_id(),
            title: draft.title,
            content: draft.content,
            background: draft.background,
            image: draft.image,
            video: draft.video,
            category,
            timestamp: now_timestamp(),
        };

        self.notes.insert(0, note.clone());
        self.persist()?;

        info!(note_id = note.id, category = %note.category, "Created note");
        Ok(Some(note))
    }

    #[instrument(level = "debug", skip(self, draft), fields(note_id = draft.note_id()))]
    pub fn update(&mut self, draft: EditDraft) -> Result<Option<Note>, DomainError> {
        if draft.is_blank() {
            debug!("Ignoring blank edit");
            return Ok(None);
        }

        let Some(position) = self.notes.iter().position(|n| n.id == draft.note_id()) else {
            debug!("Ignoring edit of missing note");
            return Ok(None);
        };

        let note = Note {
            id: draft.note_id(),
            title: draft.title,
            content: draft.content,
            background: draft.background,
            image: draft.image,
            video: draft.video,
            category: resolve_category(&draft.category),
            timestamp: format!("{}{}", now_timestamp(), EDITED_SUFFIX),
        };

        self.notes[position] = note.clone();
        self.persist()?;

        info!(note_id = note.id, "Updated note");
        Ok(Some(note))
    }

    /// Remove the note with `id`. Returns false (and writes nothing) if absent.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, id: i64) -> Result<bool, DomainError> {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            debug!("Note already absent");
            return Ok(false);
        }

        self.persist()?;
        info!(note_id = id, "Deleted note");
        Ok(true)
    }

    /// Append a category and make it the active filter.
    /// Blank and duplicate names are ignored.
    #[instrument(level = "debug", skip(self))]
    pub fn add_category(&mut self, name: &str) -> Result<bool, DomainError> {
        let Some(added) = self.categories.insert(name).map(str::to_string) else {
            debug!("Ignoring blank or duplicate category");
            return Ok(false);
        };

        self.active_filter = added;
        self.persist()?;
        info!(category = %self.active_filter, "Added category");
        Ok(true)
    }

    fn persist(&mut self) -> Result<(), DomainError> {
        self.repository.save(&self.notes, &self.categories)
    }

    /// Millisecond timestamp, bumped past the last issued id.
    /// Once `i64::MAX` is taken, the first free id from the clock upwards is used.
    fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let id = match self.last_id.checked_add(1) {
            Some(next) => now.max(next),
            None => (now..i64::MAX)
                .find(|candidate| self.notes.iter().all(|n| n.id != *candidate))
                .unwrap_or(now),
        };
        self.last_id = self.last_id.max(id);
        id
    }
}

/// Category a note is filed under when saved with `selected` active
pub fn resolve_category(selected: &str) -> String {
    let selected = selected.trim();
    if selected.is_empty() || selected == ALL_CATEGORY {
        UNCATEGORIZED.to_string()
    } else {
        selected.to_string()
    }
}

fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

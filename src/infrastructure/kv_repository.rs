// src/infrastructure/kv_repository.rs
use crate::application::{NoteRepository, StoredState};
use crate::constants::{CATEGORIES_KEY, NOTES_KEY};
use crate::domain::{Categories, DomainError, Note};
use crate::infrastructure::kv_store::KeyValueStore;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Persists notes and categories as JSON under two fixed keys
#[derive(Debug)]
pub struct KeyValueRepository<K: KeyValueStore> {
    store: K,
}

impl<K: KeyValueStore> KeyValueRepository<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Could not read stored value, using defaults");
                None
            }
        }
    }
}

/// Decode a stored note list record by record.
///
/// Records that are not decodable as a note (no integer `id`, wrong field
/// types) are skipped; missing optional fields take their defaults. A value
/// that is not a JSON array yields an empty list.
pub fn decode_notes(raw: &str) -> Vec<Note> {
    let records: Vec<Value> = match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(e) => {
            warn!(error = %e, "Stored notes are malformed, starting empty");
            return Vec::new();
        }
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Note>(record) {
            Ok(note) => Some(note),
            Err(e) => {
                warn!(index, error = %e, "Skipping malformed note record");
                None
            }
        })
        .collect()
}

/// Decode a stored category list; malformed values yield the defaults
pub fn decode_categories(raw: &str) -> Categories {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(names) => Categories::from_stored(names),
        Err(e) => {
            warn!(error = %e, "Stored categories are malformed, using defaults");
            Categories::defaults()
        }
    }
}

impl<K: KeyValueStore> NoteRepository for KeyValueRepository<K> {
    #[instrument(level = "debug", skip(self))]
    fn load(&mut self) -> StoredState {
        let notes = self
            .read(NOTES_KEY)
            .map(|raw| decode_notes(&raw))
            .unwrap_or_default();
        let categories = self
            .read(CATEGORIES_KEY)
            .map(|raw| decode_categories(&raw))
            .unwrap_or_default();

        debug!(notes = notes.len(), categories = categories.len(), "Loaded stored state");
        StoredState { notes, categories }
    }

    #[instrument(level = "debug", skip_all, fields(notes = notes.len()))]
    /// Both values are encoded before anything is written. Categories go first:
    /// if the notes write then fails, stored notes still reference only
    /// categories that exist.
    fn save(&mut self, notes: &[Note], categories: &Categories) -> Result<(), DomainError> {
        let notes_json = serde_json::to_string(notes)
            .map_err(|e| DomainError::Storage(format!("Failed to encode notes: {}", e)))?;
        let categories_json = serde_json::to_string(categories)
            .map_err(|e| DomainError::Storage(format!("Failed to encode categories: {}", e)))?;

        self.store.set(CATEGORIES_KEY, &categories_json)?;
        self.store.set(NOTES_KEY, &notes_json)?;
        Ok(())
    }
}

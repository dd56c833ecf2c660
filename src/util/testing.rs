// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{NoteRepository, StoredState};
use crate::domain::{Background, Categories, DomainError, Note};

/// Note with fixed timestamp and default background
pub fn sample_note(id: i64, title: &str, content: &str, category: &str) -> Note {
    Note {
        id,
        title: title.to_string(),
        content: content.to_string(),
        background: Background::default(),
        image: None,
        video: None,
        category: category.to_string(),
        timestamp: "1/2/2025, 10:30:00 AM".to_string(),
    }
}

/// Shared mock repository for testing code that depends on NoteRepository
///
/// Serves a configurable initial state and records every save.
///
/// # Examples
///
/// ```
/// use simple_note::application::NoteStore;
/// use simple_note::util::testing::{sample_note, MockNoteRepository};
///
/// let mock = MockNoteRepository::builder()
///     .with_note(sample_note(1, "Question", "Answer", "Work"))
///     .with_category("Travel")
///     .build();
/// let store = NoteStore::new(mock);
/// assert_eq!(store.list().len(), 1);
/// assert_eq!(store.categories().len(), 5);
/// ```
pub struct MockNoteRepository {
    initial: StoredState,
    saved: Option<StoredState>,
    save_count: usize,
    fail_saves: bool,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }

    /// Notes passed to the most recent save
    pub fn saved_notes(&self) -> Vec<Note> {
        self.saved
            .as_ref()
            .map(|state| state.notes.clone())
            .unwrap_or_default()
    }

    /// Categories passed to the most recent save
    pub fn saved_categories(&self) -> Vec<String> {
        self.saved
            .as_ref()
            .map(|state| state.categories.as_slice().to_vec())
            .unwrap_or_default()
    }
}

impl NoteRepository for MockNoteRepository {
    fn load(&mut self) -> StoredState {
        self.initial.clone()
    }

    fn save(&mut self, notes: &[Note], categories: &Categories) -> Result<(), DomainError> {
        if self.fail_saves {
            return Err(DomainError::Storage("disk full".to_string()));
        }
        self.save_count += 1;
        self.saved = Some(StoredState {
            notes: notes.to_vec(),
            categories: categories.clone(),
        });
        Ok(())
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    categories: Categories,
    fail_saves: bool,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            categories: Categories::defaults(),
            fail_saves: false,
        }
    }

    /// Append a stored note; add newest first to mirror stored order
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_category(mut self, name: &str) -> Self {
        self.categories.insert(name);
        self
    }

    /// Make every save fail with a storage error
    pub fn with_failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            initial: StoredState {
                notes: self.notes,
                categories: self.categories,
            },
            saved: None,
            save_count: 0,
            fail_saves: self.fail_saves,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["tokio", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

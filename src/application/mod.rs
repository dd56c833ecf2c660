// src/application/mod.rs
pub mod note_store;
pub mod query_engine;

pub use note_store::{NoteRepository, NoteStore, StoredState};
pub use query_engine::{filter_notes, QueryEngine};

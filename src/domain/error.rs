// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Media error: {0}")]
    Media(String),
    #[error("Config error: {0}")]
    Config(String),
}

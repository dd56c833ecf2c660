// src/domain/mod.rs
pub mod category;
pub mod draft;
pub mod error;
pub mod media;
pub mod note;

pub use category::Categories;
pub use draft::{DraftId, EditDraft, MediaUpload, NoteDraft};
pub use error::DomainError;
pub use media::{MediaKind, MediaPayload};
pub use note::{Background, Note};

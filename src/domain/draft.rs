// src/domain/draft.rs
use crate::domain::{Background, MediaKind, MediaPayload, Note};
use crate::util::text::is_blank;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of an in-flight draft; media uploads are addressed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftId(Uuid);

impl DraftId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DraftId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Result of reading one media file for a specific draft
#[derive(Debug, Clone, PartialEq)]
pub struct MediaUpload {
    pub draft: DraftId,
    pub kind: MediaKind,
    pub payload: MediaPayload,
}

fn attach_upload(
    draft: DraftId,
    image: &mut Option<MediaPayload>,
    video: &mut Option<MediaPayload>,
    upload: MediaUpload,
) -> bool {
    if upload.draft != draft {
        return false;
    }
    match upload.kind {
        MediaKind::Image => *image = Some(upload.payload),
        MediaKind::Video => *video = Some(upload.payload),
    }
    true
}

/// Unsaved state of a note being created.
///
/// `category: None` means "file it under the store's active filter".
#[derive(Debug, Clone, PartialEq)]
pub struct NoteDraft {
    id: DraftId,
    pub title: String,
    pub content: String,
    pub background: Background,
    pub image: Option<MediaPayload>,
    pub video: Option<MediaPayload>,
    pub category: Option<String>,
}

impl NoteDraft {
    pub fn new() -> Self {
        Self {
            id: DraftId::new(),
            title: String::new(),
            content: String::new(),
            background: Background::default(),
            image: None,
            video: None,
            category: None,
        }
    }

    pub fn id(&self) -> DraftId {
        self.id
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Store an upload if it was requested for this draft.
    /// Returns false for uploads addressed to another draft.
    pub fn attach(&mut self, upload: MediaUpload) -> bool {
        attach_upload(self.id, &mut self.image, &mut self.video, upload)
    }

    pub fn is_blank(&self) -> bool {
        is_blank(&self.title) && is_blank(&self.content)
    }
}

impl Default for NoteDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Unsaved edits of an existing note, seeded from the committed record
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    id: DraftId,
    note_id: i64,
    pub title: String,
    pub content: String,
    pub background: Background,
    pub image: Option<MediaPayload>,
    pub video: Option<MediaPayload>,
    pub category: String,
}

impl EditDraft {
    pub fn from_note(note: &Note) -> Self {
        Self {
            id: DraftId::new(),
            note_id: note.id,
            title: note.title.clone(),
            content: note.content.clone(),
            background: note.background,
            image: note.image.clone(),
            video: note.video.clone(),
            category: note.category.clone(),
        }
    }

    /// Draft for a note id that may not exist; the store ignores it on update
    pub fn for_id(note_id: i64) -> Self {
        Self {
            id: DraftId::new(),
            note_id,
            title: String::new(),
            content: String::new(),
            background: Background::default(),
            image: None,
            video: None,
            category: String::new(),
        }
    }

    pub fn id(&self) -> DraftId {
        self.id
    }

    pub fn note_id(&self) -> i64 {
        self.note_id
    }

    pub fn attach(&mut self, upload: MediaUpload) -> bool {
        attach_upload(self.id, &mut self.image, &mut self.video, upload)
    }

    pub fn is_blank(&self) -> bool {
        is_blank(&self.title) && is_blank(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload_for(draft: DraftId, kind: MediaKind) -> MediaUpload {
        let mime = match kind {
            MediaKind::Image => "image/png",
            MediaKind::Video => "video/mp4",
        };
        MediaUpload {
            draft,
            kind,
            payload: MediaPayload::encode(mime, b"bytes"),
        }
    }

    #[test]
    fn given_upload_for_same_draft_when_attaching_then_fills_matching_slot() {
        // Arrange
        let mut draft = NoteDraft::new().with_title("Trip");
        let upload = upload_for(draft.id(), MediaKind::Video);

        // Act
        let attached = draft.attach(upload);

        // Assert
        assert!(attached);
        assert!(draft.video.is_some());
        assert!(draft.image.is_none());
    }

    #[test]
    fn given_upload_for_other_draft_when_attaching_then_ignores_it() {
        // Arrange
        let mut first = NoteDraft::new();
        let second = NoteDraft::new();
        let upload = upload_for(second.id(), MediaKind::Image);

        // Act
        let attached = first.attach(upload);

        // Assert
        assert!(!attached);
        assert!(first.image.is_none());
    }

    #[test]
    fn given_whitespace_only_fields_when_checking_blank_then_is_blank() {
        let draft = NoteDraft::new().with_title("  ").with_content("\n\t");
        assert!(draft.is_blank());
    }

    #[test]
    fn given_note_when_creating_edit_draft_then_copies_fields() {
        let note = Note {
            id: 7,
            title: "Report".to_string(),
            content: "draft".to_string(),
            background: Background::Ocean,
            image: None,
            video: None,
            category: "Work".to_string(),
            timestamp: "1/1/2025, 9:00:00 AM".to_string(),
        };

        let mut edit = EditDraft::from_note(&note);
        let upload = upload_for(edit.id(), MediaKind::Image);

        assert_eq!(edit.note_id(), 7);
        assert_eq!(edit.category, "Work");
        assert_eq!(edit.background, Background::Ocean);
        assert!(edit.attach(upload));
        assert!(edit.image.is_some());
    }
}

mod helpers;

use anyhow::Result;
use helpers::TestStorage;
use simple_note::domain::{EditDraft, MediaKind, NoteDraft};
use simple_note::infrastructure::{read_draft_media, read_media};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build runtime")
}

#[test]
fn given_uploaded_image_when_creating_note_then_note_carries_data_url() -> Result<()> {
    // Arrange
    let storage = TestStorage::new()?;
    let mut store = storage.open_store()?;
    let image = storage.media_file("sketch.png", b"png-bytes")?;
    let mut draft = NoteDraft::new().with_title("Sketch");

    // Act
    let upload = runtime().block_on(read_media(draft.id(), MediaKind::Image, &image))?;
    assert!(draft.attach(upload));
    let note = store.create(draft)?.expect("Note should be created");

    // Assert
    let image = note.image.expect("Image should be attached");
    assert_eq!(image.mime(), Some("image/png"));
    assert_eq!(image.kind(), Some(MediaKind::Image));
    assert!(storage.read("notes")?.contains("data:image/png;base64,"));
    Ok(())
}

#[test]
fn given_two_drafts_when_upload_finishes_then_only_owner_accepts_it() -> Result<()> {
    // Arrange
    let storage = TestStorage::new()?;
    let clip = storage.media_file("clip.mp4", b"mp4-bytes")?;
    let mut creating = NoteDraft::new().with_title("New");
    let mut store = storage.open_store()?;
    let existing = store
        .create(NoteDraft::new().with_title("Existing"))?
        .expect("Note should be created");
    let mut editing = EditDraft::from_note(&existing);

    // Act
    let upload = runtime().block_on(read_media(editing.id(), MediaKind::Video, &clip))?;
    let accepted_by_creating = creating.attach(upload.clone());
    let accepted_by_editing = editing.attach(upload);

    // Assert
    assert!(!accepted_by_creating);
    assert!(accepted_by_editing);
    assert!(creating.video.is_none());
    let updated = store.update(editing)?.expect("Note should be updated");
    assert!(updated.video.is_some());
    Ok(())
}

#[test]
fn given_failed_video_read_when_reading_draft_media_then_image_still_attached() -> Result<()> {
    // Arrange
    let storage = TestStorage::new()?;
    let image = storage.media_file("pic.webp", b"webp")?;
    let missing_video = storage.media_file("ignored.txt", b"")?.with_file_name("nope.mp4");
    let mut draft = NoteDraft::new().with_content("with media");

    // Act
    let results = runtime().block_on(read_draft_media(draft.id(), Some(image), Some(missing_video)));
    for upload in results.into_iter().flatten() {
        draft.attach(upload);
    }

    // Assert
    assert!(draft.image.is_some());
    assert!(draft.video.is_none());
    Ok(())
}

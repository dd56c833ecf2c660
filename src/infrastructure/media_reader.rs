// src/infrastructure/media_reader.rs
use crate::domain::{DomainError, DraftId, MediaKind, MediaPayload, MediaUpload};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// MIME type for a media file, derived from its extension
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "ogv" | "ogg" => "video/ogg",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        _ => return None,
    };
    Some(mime)
}

/// Read a media file and encode it as a data URL for `draft`.
///
/// Fails when the extension is unknown or does not belong to `kind`.
#[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub async fn read_media(
    draft: DraftId,
    kind: MediaKind,
    path: impl AsRef<Path>,
) -> Result<MediaUpload, DomainError> {
    let path = path.as_ref();
    let mime = mime_for_path(path).ok_or_else(|| {
        DomainError::Media(format!("Unsupported media file: {}", path.display()))
    })?;
    if MediaKind::from_mime(mime) != Some(kind) {
        return Err(DomainError::Media(format!(
            "{} is not a {} file",
            path.display(),
            kind
        )));
    }

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        DomainError::Media(format!("Failed to read {}: {}", path.display(), e))
    })?;
    debug!(mime, bytes = bytes.len(), "Encoded media file");

    Ok(MediaUpload {
        draft,
        kind,
        payload: MediaPayload::encode(mime, &bytes),
    })
}

/// Read the image and video for one draft concurrently.
///
/// Each read resolves independently; `None` means no file was requested.
pub async fn read_draft_media(
    draft: DraftId,
    image: Option<PathBuf>,
    video: Option<PathBuf>,
) -> Vec<Result<MediaUpload, DomainError>> {
    let image_read = async {
        match image {
            Some(path) => Some(read_media(draft, MediaKind::Image, path).await),
            None => None,
        }
    };
    let video_read = async {
        match video {
            Some(path) => Some(read_media(draft, MediaKind::Video, path).await),
            None => None,
        }
    };

    let (image_result, video_result) = tokio::join!(image_read, video_read);
    image_result.into_iter().chain(video_result).collect()
}

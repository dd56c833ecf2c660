// src/domain/media.rs
use crate::domain::DomainError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    // Match the header of a base64 data URL: data:<type>/<subtype>[;param...];base64,
    static ref DATA_URL_REGEX: Regex =
        Regex::new(r"^data:([A-Za-z0-9.+-]+/[A-Za-z0-9.+-]+)(?:;[^;,]+)*;base64,")
            .expect("Failed to compile data URL regex");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            Some(MediaKind::Image)
        } else if mime.starts_with("video/") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// Media attachment stored inline as a `data:` URL.
///
/// Deserialization is permissive and takes stored strings as they are;
/// [`MediaPayload::from_data_url`] is the validating constructor.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaPayload(String);

impl MediaPayload {
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
    }

    pub fn from_data_url(url: impl Into<String>) -> Result<Self, DomainError> {
        let url = url.into();
        if !DATA_URL_REGEX.is_match(&url) {
            return Err(DomainError::Media("Not a base64 data URL".to_string()));
        }
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn mime(&self) -> Option<&str> {
        DATA_URL_REGEX
            .captures(&self.0)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn kind(&self) -> Option<MediaKind> {
        self.mime().and_then(MediaKind::from_mime)
    }
}

// Payloads are large; keep debug output readable.
impl fmt::Debug for MediaPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaPayload")
            .field("mime", &self.mime())
            .field("len", &self.0.len())
            .finish()
    }
}

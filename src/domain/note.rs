// src/domain/note.rs
use crate::constants::UNCATEGORIZED;
use crate::domain::MediaPayload;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual theme of a note card.
///
/// Stored as the theme's CSS class so persisted data keeps the shape the
/// board has always written. Unknown stored values fall back to [`Background::Slate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Background {
    #[default]
    Slate,
    Ocean,
    Forest,
    Violet,
    Crimson,
    Amber,
}

impl Background {
    pub const ALL: [Background; 6] = [
        Background::Slate,
        Background::Ocean,
        Background::Forest,
        Background::Violet,
        Background::Crimson,
        Background::Amber,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Background::Slate => "slate",
            Background::Ocean => "ocean",
            Background::Forest => "forest",
            Background::Violet => "violet",
            Background::Crimson => "crimson",
            Background::Amber => "amber",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Background::Slate => "bg-gradient-to-br from-gray-800 to-gray-900",
            Background::Ocean => "bg-gradient-to-br from-blue-800 to-blue-900",
            Background::Forest => "bg-gradient-to-br from-green-800 to-green-900",
            Background::Violet => "bg-gradient-to-br from-purple-800 to-purple-900",
            Background::Crimson => "bg-gradient-to-br from-red-800 to-red-900",
            Background::Amber => "bg-gradient-to-br from-yellow-800 to-yellow-900",
        }
    }

    /// Start and end colors of the card gradient
    pub fn gradient(&self) -> (&'static str, &'static str) {
        match self {
            Background::Slate => ("#1f2937", "#111827"),
            Background::Ocean => ("#1e40af", "#1e3a8a"),
            Background::Forest => ("#166534", "#14532d"),
            Background::Violet => ("#6b21a8", "#581c87"),
            Background::Crimson => ("#991b1b", "#7f1d1d"),
            Background::Amber => ("#854d0e", "#713f12"),
        }
    }

    pub fn from_css_class(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bg| bg.css_class() == class)
    }
}

impl From<String> for Background {
    fn from(value: String) -> Self {
        Self::from_css_class(&value).unwrap_or_default()
    }
}

impl From<Background> for String {
    fn from(value: Background) -> Self {
        value.css_class().to_string()
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a theme name (`ocean`), its 1-based position (`2`) or its CSS class.
impl FromStr for Background {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| Self::ALL.get(i).copied())
                .ok_or_else(|| format!("Background index must be 1-{}", Self::ALL.len()));
        }
        Self::ALL
            .into_iter()
            .find(|bg| bg.name().eq_ignore_ascii_case(s) || bg.css_class() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|bg| bg.name()).collect();
                format!("Unknown background '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

fn default_category() -> String {
    UNCATEGORIZED.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub image: Option<MediaPayload>,
    #[serde(default)]
    pub video: Option<MediaPayload>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub timestamp: String,
}

impl Note {
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// Media shown on a summary card: the image wins over the video
    pub fn preview_media(&self) -> Option<&MediaPayload> {
        self.image.as_ref().or(self.video.as_ref())
    }
}

// src/ports/html.rs
use crate::application::QueryEngine;
use crate::constants::{ALL_CATEGORY, DEFAULT_SUMMARY_LINES};
use crate::domain::{MediaKind, MediaPayload, Note};
use crate::util::text::truncate_words;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

const STYLE: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 1100px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #030712;
            color: #f9fafb;
        }
        h1, h2 {
            margin-bottom: 1.5rem;
        }
        .grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
            gap: 1.25rem;
        }
        .card {
            border-radius: 8px;
            padding: 1.25rem;
            box-shadow: 0 4px 6px rgba(0,0,0,0.3);
        }
        .card.full {
            max-width: 720px;
            margin: 0 auto;
            padding: 2rem;
        }
        .category {
            display: inline-block;
            background: rgba(0,0,0,0.3);
            padding: 2px 10px;
            border-radius: 9999px;
            font-size: 0.8em;
            color: #d1d5db;
        }
        .content {
            white-space: pre-wrap;
            word-wrap: break-word;
            color: #e5e7eb;
        }
        .media img, .media video {
            width: 100%;
            border-radius: 4px;
            margin-top: 0.75rem;
        }
        .card:not(.full) .media img, .card:not(.full) .media video {
            height: 6rem;
            object-fit: cover;
        }
        .timestamp {
            margin-top: 0.75rem;
            font-size: 0.75em;
            color: #9ca3af;
        }
        .empty {
            text-align: center;
            padding: 2.5rem;
            background: rgba(17,24,39,0.5);
            border-radius: 8px;
            color: #9ca3af;
        }
"#;

/// Renders notes as standalone HTML pages
#[derive(Debug)]
pub struct HtmlPresenter {
    summary_lines: usize,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self {
            summary_lines: DEFAULT_SUMMARY_LINES,
        }
    }

    pub fn with_summary_lines(summary_lines: usize) -> Self {
        Self { summary_lines }
    }

    /// Full view of one note: complete content, image and video
    #[instrument(level = "debug", skip(self, note), fields(note_id = note.id))]
    pub fn render_note(&self, note: &Note) -> String {
        let mut media = String::new();
        if let Some(image) = &note.image {
            media.push_str(&media_tag(MediaKind::Image, image, true));
        }
        if let Some(video) = &note.video {
            media.push_str(&media_tag(MediaKind::Video, video, true));
        }

        let body = format!(
            r#"<div class="card full" style="{style}">
        <h1>{title}</h1>
        <span class="category">{category}</span>
        <div class="content">{content}</div>
        <div class="media">{media}</div>
        <div class="timestamp">{timestamp}</div>
    </div>"#,
            style = card_style(note),
            title = encode_text(note.display_title()),
            category = encode_text(&note.category),
            content = encode_text(&note.content),
            media = media,
            timestamp = encode_text(&note.timestamp),
        );

        page(note.display_title(), &body)
    }

    /// Summary board for the notes a query selected
    #[instrument(level = "debug", skip(self, notes), fields(count = notes.len()))]
    pub fn render_board(&self, notes: &[&Note], query: &QueryEngine) -> String {
        let body = if notes.is_empty() {
            let hint = if query.is_searching() {
                "Try a different search term or category"
            } else {
                "Create your first note to get started"
            };
            format!(
                r#"<div class="empty">
        <h3>No notes found</h3>
        <p>{}</p>
    </div>"#,
                hint
            )
        } else {
            let cards: Vec<String> = notes.iter().map(|note| self.summary_card(note)).collect();
            format!(
                r#"<h2>{}</h2>
    <div class="grid">
{}
    </div>"#,
                encode_text(&board_heading(notes.len(), query)),
                cards.join("\n")
            )
        };

        page("Notes", &body)
    }

    fn summary_card(&self, note: &Note) -> String {
        let media = note
            .preview_media()
            .map(|payload| {
                let kind = if note.image.is_some() {
                    MediaKind::Image
                } else {
                    MediaKind::Video
                };
                media_tag(kind, payload, false)
            })
            .unwrap_or_default();

        format!(
            r#"        <div class="card" id="note-{id}" style="{style}">
            <h3>{title}</h3>
            <span class="category">{category}</span>
            <div class="content">{content}</div>
            <div class="media">{media}</div>
            <div class="timestamp">{timestamp}</div>
        </div>"#,
            id = note.id,
            style = card_style(note),
            title = encode_text(note.display_title()),
            category = encode_text(&note.category),
            content = encode_text(&truncate_words(&note.content, self.summary_lines)),
            media = media,
            timestamp = encode_text(&note.timestamp),
        )
    }
}

impl Default for HtmlPresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Heading above the card grid
pub fn board_heading(count: usize, query: &QueryEngine) -> String {
    if query.category() != ALL_CATEGORY {
        query.category().to_string()
    } else if query.is_searching() {
        format!("Search Results ({})", count)
    } else {
        "All Notes".to_string()
    }
}

fn card_style(note: &Note) -> String {
    let (from, to) = note.background.gradient();
    format!("background: linear-gradient(to bottom right, {}, {});", from, to)
}

fn media_tag(kind: MediaKind, payload: &MediaPayload, controls: bool) -> String {
    let src = encode_double_quoted_attribute(payload.as_str());
    match kind {
        MediaKind::Image => format!(r#"<img src="{}" alt="">"#, src),
        MediaKind::Video if controls => format!(r#"<video src="{}" controls></video>"#, src),
        MediaKind::Video => format!(r#"<video src="{}"></video>"#, src),
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
    {body}
</body>
</html>"#,
        title = encode_text(title),
        style = STYLE,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::sample_note;

    #[test]
    fn given_query_when_building_heading_then_matches_board_rules() {
        let cases = [
            ("", "All", 3, "All Notes"),
            ("milk", "All", 1, "Search Results (1)"),
            ("", "Work", 2, "Work"),
            ("milk", "Personal", 1, "Personal"),
        ];

        for (search, category, count, expected) in cases {
            let query = QueryEngine::new(search, category);
            assert_eq!(board_heading(count, &query), expected);
        }
    }

    #[test]
    fn given_markup_in_title_when_rendering_note_then_escapes_it() {
        let presenter = HtmlPresenter::new();
        let note = sample_note(1, "<script>alert(1)</script>", "a & b", "Work");

        let html = presenter.render_note(&note);

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn given_empty_title_when_rendering_note_then_shows_untitled() {
        let presenter = HtmlPresenter::new();
        let note = sample_note(1, "", "body", "Work");

        let html = presenter.render_note(&note);

        assert!(html.contains("<h1>Untitled</h1>"));
    }

    #[test]
    fn given_long_content_when_rendering_board_then_truncates_summary() {
        let presenter = HtmlPresenter::with_summary_lines(1);
        let content = (1..=15).map(|n| format!("w{}", n)).collect::<Vec<_>>().join(" ");
        let note = sample_note(1, "Long", &content, "Work");

        let html = presenter.render_board(&[&note], &QueryEngine::everything());

        assert!(html.contains("w10..."));
        assert!(!html.contains("w11"));
    }

    #[test]
    fn given_no_notes_and_search_when_rendering_board_then_suggests_other_search() {
        let presenter = HtmlPresenter::new();

        let html = presenter.render_board(&[], &QueryEngine::new("zzz", "All"));

        assert!(html.contains("No notes found"));
        assert!(html.contains("Try a different search term"));
    }
}

// src/util/text.rs
use crate::constants::WORDS_PER_LINE;

/// True when the text is empty after trimming whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Shorten note content for summary cards.
///
/// Splits on single spaces and keeps at most `lines * WORDS_PER_LINE` words,
/// appending `...` when anything was cut. Newlines inside a word are kept.
///
/// # Examples
///
/// ```
/// use simple_note::util::text::truncate_words;
///
/// let text = "one two three four five six seven eight nine ten eleven";
/// assert_eq!(truncate_words(text, 1), "one two three four five six seven eight nine ten...");
/// assert_eq!(truncate_words("short", 2), "short");
/// ```
pub fn truncate_words(text: &str, lines: usize) -> String {
    let limit = lines.saturating_mul(WORDS_PER_LINE);
    let words: Vec<&str> = text.split(' ').collect();
    if words.len() > limit {
        format!("{}...", words[..limit].join(" "))
    } else {
        text.to_string()
    }
}

// src/constants.rs
//
// Application-wide constants shared by the store, the presenters and the CLI.
// Each constant is documented with its purpose and usage context.

/// Storage key holding the serialized note list.
///
/// Used in: `infrastructure/kv_repository.rs`
pub const NOTES_KEY: &str = "notes";

/// Storage key holding the serialized category list.
///
/// Used in: `infrastructure/kv_repository.rs`
pub const CATEGORIES_KEY: &str = "categories";

/// Synthetic category meaning "no filter".
///
/// Always the first entry of the category list. Never assigned to a note:
/// saving while it is active files the note under [`UNCATEGORIZED`].
pub const ALL_CATEGORY: &str = "All";

/// Category given to notes saved while the active filter is [`ALL_CATEGORY`].
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Category list used when nothing (or nothing readable) is stored.
pub const DEFAULT_CATEGORIES: &[&str] = &[ALL_CATEGORY, "Work", "Personal", "Ideas"];

/// Appended to the timestamp of a note on every update.
pub const EDITED_SUFFIX: &str = " (edited)";

/// Human-readable timestamp layout, e.g. `3/14/2025, 9:26:53 AM`.
///
/// Used in: `application/note_store.rs`
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Words shown per summary line when truncating note content on the board.
///
/// Used in: `util/text.rs`
pub const WORDS_PER_LINE: usize = 10;

/// Default number of summary lines for note previews.
pub const DEFAULT_SUMMARY_LINES: usize = 2;

/// Delay in milliseconds after spawning the browser before returning.
///
/// The rendered page lives in a temporary directory that is removed when the
/// renderer is dropped. The browser needs a brief moment to read the file
/// before that happens.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;

// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use application::{NoteRepository, NoteStore, QueryEngine};
use domain::{DomainError, EditDraft, MediaUpload, Note, NoteDraft};
use infrastructure::{BrowserRenderer, Config, FileKeyValueStore, KeyValueRepository};
use ports::HtmlPresenter;
use tracing::{debug, info, warn};
use crate::cli::args::{Args, CategoryAction, Command, ConfigAction};
use crate::util::text::truncate_words;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting simple-note with arguments");

    // Initialize configuration
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    if let Command::Config { action: ConfigAction::Init { force } } = args.command {
        return handle_config_init(&config_path, force);
    }

    let config = Config::load_or_default(&config_path)?;
    let data_dir = config.data_dir(args.data_dir.as_deref())?;
    debug!(?data_dir, "Using data directory");

    // Initialize infrastructure
    let kv_store = FileKeyValueStore::new(&data_dir)
        .with_context(|| format!("Cannot use data directory {}", data_dir.display()))?;
    let mut store = NoteStore::new(KeyValueRepository::new(kv_store));

    match args.command {
        Command::Add {
            title,
            content,
            background,
            image,
            video,
            category,
        } => {
            let background = match background {
                Some(background) => background,
                None => config.default_background()?,
            };
            let mut draft = NoteDraft::new()
                .with_title(title)
                .with_content(content)
                .with_background(background);
            draft.category = category;
            handle_add(&mut store, draft, image, video)
        }
        Command::Edit {
            note_id,
            title,
            content,
            background,
            image,
            video,
            no_image,
            no_video,
            category,
        } => {
            let Some(note) = store.get(note_id) else {
                println!("Note {} not found, nothing changed", note_id);
                return Ok(());
            };
            let mut draft = EditDraft::from_note(note);
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(content) = content {
                draft.content = content;
            }
            if let Some(background) = background {
                draft.background = background;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if no_image {
                draft.image = None;
            }
            if no_video {
                draft.video = None;
            }
            handle_edit(&mut store, draft, image, video)
        }
        Command::Delete { note_id } => handle_delete(&mut store, note_id),
        Command::List {
            search,
            category,
            json,
        } => handle_list(&store, search.as_deref().unwrap_or(""), &category, json, &config),
        Command::View { note_id, json } => handle_view(&store, note_id, json, &config),
        Command::Board { search, category } => {
            handle_board(&store, search.as_deref().unwrap_or(""), &category, &config)
        }
        Command::Category { action } => match action {
            CategoryAction::List => handle_category_list(&store),
            CategoryAction::Add { name } => handle_category_add(&mut store, &name),
        },
        Command::Config { action } => match action {
            ConfigAction::Init { force } => handle_config_init(&config_path, force),
        },
    }
}

pub fn handle_add<R: NoteRepository>(
    store: &mut NoteStore<R>,
    mut draft: NoteDraft,
    image: Option<PathBuf>,
    video: Option<PathBuf>,
) -> Result<()> {
    for upload in load_uploads(draft.id(), image, video)? {
        draft.attach(upload);
    }

    match store.create(draft)? {
        Some(note) => println!("Created note {} in {}", note.id, note.category),
        None => println!("Nothing to save: title and content are both empty"),
    }
    Ok(())
}

pub fn handle_edit<R: NoteRepository>(
    store: &mut NoteStore<R>,
    mut draft: EditDraft,
    image: Option<PathBuf>,
    video: Option<PathBuf>,
) -> Result<()> {
    for upload in load_uploads(draft.id(), image, video)? {
        draft.attach(upload);
    }

    let note_id = draft.note_id();
    match store.update(draft)? {
        Some(note) => println!("Updated note {} ({})", note.id, note.timestamp),
        None => println!("Note {} unchanged: not found, or title and content both empty", note_id),
    }
    Ok(())
}

pub fn handle_delete<R: NoteRepository>(store: &mut NoteStore<R>, note_id: i64) -> Result<()> {
    if store.delete(note_id)? {
        println!("Deleted note {}", note_id);
    } else {
        println!("Note {} not found, nothing deleted", note_id);
    }
    Ok(())
}

pub fn handle_list<R: NoteRepository>(
    store: &NoteStore<R>,
    search: &str,
    category: &str,
    json: bool,
    config: &Config,
) -> Result<()> {
    let query = QueryEngine::new(search, category);
    let notes = query.apply(store.list());
    info!(count = notes.len(), "Listing notes");

    if json {
        let json = serde_json::to_string_pretty(&notes).context("Failed to serialize notes")?;
        println!("{}", json);
        return Ok(());
    }

    for note in notes {
        println!("{}", format_summary(note, config.display.summary_lines));
    }
    Ok(())
}

pub fn handle_view<R: NoteRepository>(
    store: &NoteStore<R>,
    note_id: i64,
    json: bool,
    config: &Config,
) -> Result<()> {
    let note = store.get(note_id).ok_or(DomainError::NoteNotFound(note_id))?;
    debug!(?note, "Retrieved note");

    if json {
        let json = serde_json::to_string_pretty(note).context("Failed to serialize note")?;
        println!("{}", json);
        return Ok(());
    }

    let presenter = HtmlPresenter::with_summary_lines(config.display.summary_lines);
    let html = presenter.render_note(note);
    open_page(&format!("note-{}.html", note.id), &html)
}

pub fn handle_board<R: NoteRepository>(
    store: &NoteStore<R>,
    search: &str,
    category: &str,
    config: &Config,
) -> Result<()> {
    let query = QueryEngine::new(search, category);
    let notes = query.apply(store.list());

    let presenter = HtmlPresenter::with_summary_lines(config.display.summary_lines);
    let html = presenter.render_board(&notes, &query);
    open_page("board.html", &html)
}

pub fn handle_category_list<R: NoteRepository>(store: &NoteStore<R>) -> Result<()> {
    for category in store.categories() {
        println!("{}", category);
    }
    Ok(())
}

pub fn handle_category_add<R: NoteRepository>(store: &mut NoteStore<R>, name: &str) -> Result<()> {
    if store.add_category(name)? {
        println!("Added category {}", store.active_filter());
    } else {
        println!("Category '{}' is blank or already exists", name.trim());
    }
    Ok(())
}

pub fn handle_config_init(path: &Path, force: bool) -> Result<()> {
    Config::create_default(path, force)?;
    info!(?path, "Wrote default config");
    println!("Wrote default config to {}", path.display());
    Ok(())
}

/// One listing entry: header line plus indented content preview
pub fn format_summary(note: &Note, summary_lines: usize) -> String {
    let mut line = format!(
        "{}  {}  [{}]  {}",
        note.id,
        note.display_title(),
        note.category,
        note.timestamp
    );
    let mut markers = Vec::new();
    if note.image.is_some() {
        markers.push("image");
    }
    if note.video.is_some() {
        markers.push("video");
    }
    if !markers.is_empty() {
        line.push_str(&format!("  +{}", markers.join(",")));
    }
    let preview = truncate_words(&note.content, summary_lines);
    if !preview.trim().is_empty() {
        line.push_str("\n    ");
        line.push_str(&preview.replace('\n', "\n    "));
    }
    line
}

/// Read requested media files for a draft. Failed reads are reported and
/// leave the corresponding field untouched.
fn load_uploads(
    draft: domain::DraftId,
    image: Option<PathBuf>,
    video: Option<PathBuf>,
) -> Result<Vec<MediaUpload>> {
    if image.is_none() && video.is_none() {
        return Ok(Vec::new());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start media reader")?;
    let results = runtime.block_on(infrastructure::read_draft_media(draft, image, video));

    let mut uploads = Vec::new();
    for result in results {
        match result {
            Ok(upload) => uploads.push(upload),
            Err(e) => {
                warn!(error = %e, "Media attachment skipped");
                eprintln!("Skipping attachment: {}", e);
            }
        }
    }
    Ok(uploads)
}

fn open_page(file_name: &str, html: &str) -> Result<()> {
    let mut renderer = BrowserRenderer::new();
    let path = renderer.write_page(file_name, html)?;
    renderer.open_in_browser(&path)
}

use anyhow::{Context, Result};
use simple_note::application::NoteStore;
use simple_note::infrastructure::{FileKeyValueStore, KeyValueRepository};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub type FileNoteStore = NoteStore<KeyValueRepository<FileKeyValueStore>>;

/// Test fixture for a throwaway data directory
#[allow(dead_code)]
pub struct TestStorage {
    _temp_dir: TempDir,
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestStorage {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()
            .context("Failed to create temporary directory")?;
        let data_dir = temp_dir.path().join("data");

        Ok(Self {
            _temp_dir: temp_dir,
            data_dir,
        })
    }

    /// Seed the data directory with raw stored values
    pub fn with_raw(self, notes: Option<&str>, categories: Option<&str>) -> Result<Self> {
        std::fs::create_dir_all(&self.data_dir)?;
        if let Some(notes) = notes {
            std::fs::write(self.data_dir.join("notes.json"), notes)?;
        }
        if let Some(categories) = categories {
            std::fs::write(self.data_dir.join("categories.json"), categories)?;
        }
        Ok(self)
    }

    /// Open a fresh store over this directory, hydrating from disk
    pub fn open_store(&self) -> Result<FileNoteStore> {
        let kv = FileKeyValueStore::new(&self.data_dir)?;
        Ok(NoteStore::new(KeyValueRepository::new(kv)))
    }

    pub fn read(&self, key: &str) -> Result<String> {
        let path = self.path(key);
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))
    }

    pub fn path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    /// Write a small media file next to the data directory
    pub fn media_file(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.data_dir.parent().unwrap_or(Path::new(".")).join(name);
        std::fs::write(&path, bytes)?;
        Ok(path)
    }
}

/// Notes from the grocery/report scenario, stored newest first
#[allow(dead_code)]
pub const SCENARIO_NOTES: &str = r#"[
    {"id": 1700000000002, "title": "Groceries", "content": "milk", "background": "bg-gradient-to-br from-gray-800 to-gray-900", "image": null, "video": null, "category": "Personal", "timestamp": "11/14/2023, 10:13:20 PM"},
    {"id": 1700000000001, "title": "Report", "content": "draft", "background": "bg-gradient-to-br from-blue-800 to-blue-900", "image": null, "video": null, "category": "Work", "timestamp": "11/14/2023, 10:13:20 PM"}
]"#;

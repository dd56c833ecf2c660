// src/infrastructure/mod.rs
pub mod config;
pub mod kv_repository;
pub mod kv_store;
pub mod media_reader;
pub mod renderer;

pub use config::Config;
pub use kv_repository::KeyValueRepository;
pub use kv_store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use media_reader::{read_draft_media, read_media};
pub use renderer::BrowserRenderer;

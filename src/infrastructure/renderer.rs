// src/infrastructure/renderer.rs
use crate::constants::BROWSER_LAUNCH_DELAY_MS;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};
use tracing::{debug, instrument};

/// Writes rendered pages to a private temporary directory and opens them.
///
/// The directory lives as long as the renderer.
#[derive(Debug)]
pub struct BrowserRenderer {
    temp_dir: Option<TempDir>,
}

impl BrowserRenderer {
    pub fn new() -> Self {
        Self { temp_dir: None }
    }

    fn dir(&mut self) -> Result<&Path> {
        if self.temp_dir.is_none() {
            let temp_dir = Builder::new()
                .prefix("simple-note-")
                .rand_bytes(5)
                .tempdir()
                .context("Failed to create temporary directory")?;
            self.temp_dir = Some(temp_dir);
        }
        self.temp_dir
            .as_ref()
            .map(TempDir::path)
            .context("Temporary directory missing")
    }

    #[instrument(level = "debug", skip(self, html), fields(bytes = html.len()))]
    pub fn write_page(&mut self, file_name: &str, html: &str) -> Result<PathBuf> {
        let file_path = self.dir()?.join(file_name);

        File::create(&file_path)
            .with_context(|| format!("Failed to create page at {}", file_path.display()))?
            .write_all(html.as_bytes())
            .context("Failed to write page content")?;

        debug!(?file_path, "Wrote page");
        Ok(file_path)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn open_in_browser(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/C", "start", path_str])
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "linux")]
        {
            std::process::Command::new("xdg-open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }

        std::thread::sleep(std::time::Duration::from_millis(BROWSER_LAUNCH_DELAY_MS));

        Ok(())
    }
}

impl Default for BrowserRenderer {
    fn default() -> Self {
        Self::new()
    }
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional JSON file in the working directory.
pub const CONFIG_FILE: &str = "gallery.json";
/// Overrides `data_dir` when set.
pub const DATA_DIR_ENV: &str = "GALLERY_DATA_DIR";

// ---------------------------------------------------------------------------
// Gallery configuration
// ---------------------------------------------------------------------------

/// ```json
/// { "data_dir": "./data", "canvas_width": 1024, "canvas_height": 576 }
/// ```
/// Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Root folder holding `surface-temperature/` and `pay-gap/`.
    pub data_dir: PathBuf,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            canvas_width: 1024.0,
            canvas_height: 576.0,
        }
    }
}

impl GalleryConfig {
    /// `gallery.json` if present, then the environment override.
    pub fn load() -> Result<Self> {
        let mut config = Self::from_file(Path::new(CONFIG_FILE))?;
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }
        Ok(config)
    }

    /// Defaults when `path` does not exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn canvas_size(&self) -> [f32; 2] {
        [self.canvas_width, self.canvas_height]
    }
}

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::collect::STANDARD_PACK_SIZE;
use crate::model::{ALT_PLACEHOLDER, STICKER_BASE_URL};

/// Run settings. Every field may be omitted from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Year directory the README lives under (not necessarily the CN year).
    pub year: i32,
    pub root: PathBuf,
    pub output: PathBuf,
    pub base_url: String,
    pub standard_size: usize,
    pub alt_placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            year: 2021,
            root: PathBuf::from("."),
            output: PathBuf::from("temp_data.json"),
            base_url: STICKER_BASE_URL.to_string(),
            standard_size: STANDARD_PACK_SIZE,
            alt_placeholder: ALT_PLACEHOLDER.to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let cfg = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(cfg)
    }

    /// `<root>/<year>/<folder>/README.txt`
    pub fn readme_path(&self, folder: &str) -> PathBuf {
        self.root
            .join(self.year.to_string())
            .join(folder)
            .join("README.txt")
    }
}

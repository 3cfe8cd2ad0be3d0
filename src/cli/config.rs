//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directory name used under the home directory when nothing else is set.
pub const DEFAULT_NOTES_DIR: &str = "dev-notes";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Notes directory
    pub dir: Option<PathBuf>,

    /// Default log filter when neither RUST_LOG nor -v is given
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/dev-notes/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dev-notes")
            .join("config.toml")
    }

    /// Resolve the notes directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. `~/dev-notes`
    ///
    /// The result is made absolute against the current directory.
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> Result<PathBuf> {
        let dir = match cli_dir.or(self.dir.as_ref()) {
            Some(dir) => dir.clone(),
            None => dirs::home_dir()
                .context("could not determine home directory; pass --dir")?
                .join(DEFAULT_NOTES_DIR),
        };

        std::path::absolute(&dir)
            .with_context(|| format!("failed to resolve notes directory: {}", dir.display()))
    }
}

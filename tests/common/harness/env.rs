//! Isolated test environment with temp directory.

use super::NotesCommand;
use chrono::{Local, TimeZone};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::TempDir;

/// Isolated test environment with a temporary home and notes directory.
///
/// The notes directory is not created up front, so tests can observe the
/// server creating it.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    home: PathBuf,
    notes_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let home = temp_dir.path().join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        let notes_dir = temp_dir.path().join("dev-notes");
        Self {
            _temp_dir: temp_dir,
            home,
            notes_dir,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the isolated home directory.
    #[allow(dead_code)]
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Writes a note file directly, bypassing the binary.
    #[allow(dead_code)]
    pub fn add_note(&self, filename: &str, content: &str) -> PathBuf {
        std::fs::create_dir_all(&self.notes_dir).expect("Failed to create notes directory");
        let path = self.notes_dir.join(filename);
        std::fs::write(&path, content).expect("Failed to write note");
        path
    }

    /// Writes the config file where `dirs::config_dir` looks for it under
    /// the isolated home.
    #[allow(dead_code)]
    pub fn write_config(&self, contents: &str) {
        for base in [
            self.home.join(".config"),
            self.home.join("Library").join("Application Support"),
        ] {
            let dir = base.join("dev-notes");
            std::fs::create_dir_all(&dir).expect("Failed to create config directory");
            std::fs::write(dir.join("config.toml"), contents).expect("Failed to write config");
        }
    }

    /// Sets a note's modification time to noon local time on the given day.
    #[allow(dead_code)]
    pub fn set_modified(&self, filename: &str, year: i32, month: u32, day: u32) {
        let when: SystemTime = Local
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .unwrap()
            .into();
        std::fs::File::options()
            .write(true)
            .open(self.notes_dir.join(filename))
            .expect("Failed to open note")
            .set_modified(when)
            .expect("Failed to set modification time");
    }

    /// Creates a NotesCommand configured for this test environment.
    pub fn cmd(&self) -> NotesCommand {
        NotesCommand::new().home(&self.home).dir(&self.notes_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

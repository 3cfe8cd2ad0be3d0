//! Note descriptor: name, path and modification time without content.

use chrono::{DateTime, Local, Utc};
use std::path::{Path, PathBuf};

/// A note as seen by the filter engine.
///
/// Built from filesystem metadata; `modified` is the last-write time at the
/// moment the note was described.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDescriptor {
    name: String,
    path: PathBuf,
    modified: DateTime<Utc>,
}

impl NoteDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, modified: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            modified,
        }
    }

    /// The filename within the store.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path of the note file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// The local calendar day of the last modification, as `YYYY-MM-DD`.
    pub fn modified_day(&self) -> String {
        self.modified
            .with_timezone(&Local)
            .format("%Y-%m-%d")
            .to_string()
    }
}

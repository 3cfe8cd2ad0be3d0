//! The four note tools and their text responses.

use thiserror::Error;
use tracing::debug;

use crate::domain::{NoteName, ParseDateError, ParseNoteNameError, SearchCriteria};
use crate::infra::{FsError, NoteStore};

pub const EMPTY_STORE_MESSAGE: &str = "No notes found. Use save_note to create one!";
pub const NO_MATCH_MESSAGE: &str = "No notes matched your search criteria.";

/// Errors from a tool invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A caller-supplied value was rejected (bad filename, malformed date).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Io(#[from] FsError),
}

impl From<ParseDateError> for ToolError {
    fn from(err: ParseDateError) -> Self {
        ToolError::InvalidArgument(err.to_string())
    }
}

impl From<ParseNoteNameError> for ToolError {
    fn from(err: ParseNoteNameError) -> Self {
        ToolError::InvalidArgument(err.to_string())
    }
}

pub type ToolResult = Result<String, ToolError>;

/// Dispatches note operations against a store.
///
/// Every operation ensures the storage root first and makes a single attempt
/// against the filesystem.
#[derive(Debug, Clone)]
pub struct NoteTools {
    store: NoteStore,
}

impl NoteTools {
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Saves a note, overwriting any note with the same name.
    pub fn save_note(&self, filename: &str, content: &str) -> ToolResult {
        let name = NoteName::new(filename)?;
        self.store.ensure_root()?;
        let path = self.store.save(&name, content)?;
        Ok(format!("Saved note to {}", path.display()))
    }

    pub fn list_notes(&self) -> ToolResult {
        self.store.ensure_root()?;
        let names = self.store.list()?;

        if names.is_empty() {
            return Ok(EMPTY_STORE_MESSAGE.to_string());
        }

        let lines: Vec<String> = names.iter().map(|n| format!("  - {}", n)).collect();
        Ok(format!("Found {} note(s):\n{}", names.len(), lines.join("\n")))
    }

    /// Returns the note's raw content, or a not-found message.
    ///
    /// Any read failure (missing, unreadable, not UTF-8) is reported as
    /// not found rather than as an error.
    pub fn read_note(&self, filename: &str) -> ToolResult {
        let name = NoteName::new(filename)?;
        self.store.ensure_root()?;

        match self.store.read(&name) {
            Ok(content) => Ok(content),
            Err(err) => {
                debug!(note = %name, error = %err, "read failed");
                Ok(format!(
                    "Note not found: {}. Use list_notes to see available notes.",
                    name
                ))
            }
        }
    }

    /// Filters notes by name, path and modification date.
    pub fn search_notes(
        &self,
        name: Option<&str>,
        filepath: Option<&str>,
        date: Option<&str>,
    ) -> ToolResult {
        let criteria = SearchCriteria::parse(name, filepath, date)?;
        self.store.ensure_root()?;

        let notes = self.store.describe_all()?;
        if notes.is_empty() {
            return Ok(EMPTY_STORE_MESSAGE.to_string());
        }

        let total = notes.len();
        let results = criteria.filter(notes);
        debug!(total, matched = results.len(), "searched notes");

        if results.is_empty() {
            return Ok(NO_MATCH_MESSAGE.to_string());
        }

        let entries: Vec<String> = results
            .iter()
            .map(|n| {
                format!(
                    "  - {}\n    Path: {}\n    Modified: {}",
                    n.name(),
                    n.path().display(),
                    n.modified_day()
                )
            })
            .collect();

        Ok(format!(
            "Found {} matching note(s):\n{}",
            results.len(),
            entries.join("\n")
        ))
    }
}

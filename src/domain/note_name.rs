//! Validated note filename with the `.md` suffix applied.

use std::fmt;
use std::str::FromStr;

/// Suffix every note filename carries.
pub const NOTE_EXTENSION: &str = ".md";

/// The filename identifying a note within the store.
///
/// Names are normalized by appending [`NOTE_EXTENSION`] when the caller
/// omitted it, so `todo` and `todo.md` name the same note.
///
/// # Validation Rules
/// - Non-empty
/// - No path separators or NUL bytes
/// - Not `.`, `..` or a bare `.md`
///
/// # Examples
///
/// ```
/// use dev_notes::domain::NoteName;
///
/// let name = NoteName::new("todo").unwrap();
/// assert_eq!(name.as_str(), "todo.md");
///
/// let same = NoteName::new("todo.md").unwrap();
/// assert_eq!(name, same);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NoteName(String);

/// Error returned when a filename cannot name a note.
#[derive(Debug, Clone)]
pub struct ParseNoteNameError(String);

impl fmt::Display for ParseNoteNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseNoteNameError {}

impl NoteName {
    /// Creates a NoteName, appending `.md` if missing.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteNameError` if the name is empty, is `.`, `..` or a
    /// bare `.md`, or contains a path separator or NUL byte.
    pub fn new(s: &str) -> Result<Self, ParseNoteNameError> {
        if s.is_empty() {
            return Err(ParseNoteNameError("filename cannot be empty".to_string()));
        }

        if s.contains(['/', '\\', '\0']) {
            return Err(ParseNoteNameError(format!(
                "invalid filename '{}': must not contain path separators",
                s
            )));
        }

        if s == "." || s == ".." || s == NOTE_EXTENSION {
            return Err(ParseNoteNameError(format!(
                "invalid filename '{}': not a file name",
                s
            )));
        }

        let normalized = if s.ends_with(NOTE_EXTENSION) {
            s.to_string()
        } else {
            format!("{}{}", s, NOTE_EXTENSION)
        };

        Ok(Self(normalized))
    }

    /// Returns the normalized filename.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteName(\"{}\")", self.0)
    }
}

impl FromStr for NoteName {
    type Err = ParseNoteNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for NoteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

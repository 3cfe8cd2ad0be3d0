//! Flat-directory note store with atomic writes.
//!
//! Every note is one file directly under the storage root. There is no
//! locking: two writers saving the same name race and the last rename wins.
//!
//! A save replaces the note's directory entry. An existing note keeps its
//! permission bits, but a symlinked note is replaced by a regular file.

use crate::domain::{NoteDescriptor, NoteName};
use chrono::{DateTime, Utc};
use std::fs;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Filename prefix of in-flight temp files; such entries are never listed.
pub const TEMP_PREFIX: &str = ".dev-notes-tmp";

/// Errors during file system operations on notes.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("note file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// A directory of markdown notes.
#[derive(Debug, Clone)]
pub struct NoteStore {
    root: PathBuf,
}

impl NoteStore {
    /// Creates a store rooted at `root`. Nothing is touched on disk until
    /// [`NoteStore::ensure_root`] runs.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves the file path for a note name.
    pub fn note_path(&self, name: &NoteName) -> PathBuf {
        self.root.join(name.as_str())
    }

    /// Creates the storage root and any missing ancestors.
    ///
    /// Idempotent: an existing directory is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotADirectory` if something other than a directory
    /// occupies the root path, or another `FsError` if creation is refused.
    pub fn ensure_root(&self) -> Result<(), FsError> {
        if self.root.exists() && !self.root.is_dir() {
            return Err(FsError::NotADirectory {
                path: self.root.clone(),
            });
        }

        fs::create_dir_all(&self.root).map_err(|e| FsError::from_io(&self.root, e))
    }

    /// Writes a note, replacing any existing file with the same name.
    ///
    /// Uses a temporary file in the storage root and an atomic rename, so a
    /// reader sees either the old content or the new content. A new note gets
    /// the default file mode (subject to the umask); an overwritten note keeps
    /// the mode it had.
    ///
    /// Returns the path the note was written to.
    pub fn save(&self, name: &NoteName, content: &str) -> Result<PathBuf, FsError> {
        let path = self.note_path(name);
        let io_err = |source: io::Error| FsError::Io {
            path: path.clone(),
            source,
        };

        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_PREFIX);
        #[cfg(unix)]
        {
            use std::fs::Permissions;
            use std::os::unix::fs::PermissionsExt;
            // masked by the umask at creation, like a plain create
            builder.permissions(Permissions::from_mode(0o666));
        }
        let mut temp = builder.tempfile_in(&self.root).map_err(io_err)?;

        if let Ok(existing) = fs::metadata(&path) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .map_err(io_err)?;
        }

        temp.write_all(content.as_bytes()).map_err(io_err)?;

        temp.persist(&path).map_err(|e| FsError::AtomicWrite {
            path: path.clone(),
            source: e.error,
        })?;

        debug!(path = %path.display(), bytes = content.len(), "saved note");
        Ok(path)
    }

    /// Lists the filenames directly under the storage root.
    ///
    /// Does not recurse. In-flight temp files from concurrent saves are
    /// skipped. Names are sorted lexicographically; the directory is re-read
    /// on every call.
    pub fn list(&self) -> Result<Vec<String>, FsError> {
        if !self.root.exists() {
            return Err(FsError::NotFound {
                path: self.root.clone(),
            });
        }

        let mut names = Vec::new();

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.root.as_path()).to_path_buf();
                FsError::from_io(&path, e.into())
            })?;
            if is_temp_file(&entry) {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        debug!(root = %self.root.display(), count = names.len(), "listed notes");
        Ok(names)
    }

    /// Reads a note's content as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` if the file doesn't exist.
    /// Returns `FsError::PermissionDenied` if access is denied.
    /// Returns `FsError::InvalidEncoding` if the file is not valid UTF-8.
    pub fn read(&self, name: &NoteName) -> Result<String, FsError> {
        let path = self.note_path(name);
        let bytes = fs::read(&path).map_err(|e| FsError::from_io(&path, e))?;

        String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
            path,
            encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
        })
    }

    /// Stats a single entry of the store.
    pub fn describe(&self, filename: &str) -> Result<NoteDescriptor, FsError> {
        let path = self.root.join(filename);
        let metadata = fs::metadata(&path).map_err(|e| FsError::from_io(&path, e))?;
        let modified = metadata.modified().map_err(|e| FsError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(NoteDescriptor::new(
            filename,
            path,
            DateTime::<Utc>::from(modified),
        ))
    }

    /// Describes every listed entry, in [`NoteStore::list`] order.
    ///
    /// An entry removed between listing and stat fails the whole call.
    pub fn describe_all(&self) -> Result<Vec<NoteDescriptor>, FsError> {
        self.list()?
            .iter()
            .map(|name| self.describe(name))
            .collect()
    }
}

/// Returns true if the entry is a temp file left by [`NoteStore::save`].
fn is_temp_file(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with(TEMP_PREFIX))
}

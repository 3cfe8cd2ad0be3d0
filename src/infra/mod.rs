//! File I/O against the notes directory

mod fs;

pub use fs::{FsError, NoteStore};

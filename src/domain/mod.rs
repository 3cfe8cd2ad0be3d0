//! Core types: NoteName, NoteDescriptor, DateFilter, SearchCriteria

mod criteria;
mod date_filter;
mod descriptor;
mod note_name;

pub use criteria::SearchCriteria;
pub use date_filter::{DateFilter, ParseDateError};
pub use descriptor::NoteDescriptor;
pub use note_name::{NOTE_EXTENSION, NoteName, ParseNoteNameError};

//! MCP server: the note tools served over stdio through rmcp

mod service;
mod tools;
mod transport;

pub use service::{NotesService, ReadNoteParams, SERVER_NAME, SaveNoteParams, SearchNotesParams};
pub use tools::{EMPTY_STORE_MESSAGE, NO_MATCH_MESSAGE, NoteTools, ToolError, ToolResult};
pub use transport::{
    INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR, Screened, screen, serve,
    serve_stdio,
};

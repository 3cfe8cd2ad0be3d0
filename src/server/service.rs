//! rmcp service exposing the note tools.

use rmcp::{
    ErrorData as McpError,
    handler::server::{ServerHandler, tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::{RequestContext, RoleServer},
    tool, tool_router,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::tools::{NoteTools, ToolResult};

pub const SERVER_NAME: &str = "dev-notes";

/// Parameters for `save_note`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SaveNoteParams {
    /// Name for the note file (e.g. 'todo.md')
    pub filename: String,
    /// The markdown content of the note
    pub content: String,
}

/// Parameters for `read_note`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReadNoteParams {
    /// Name of the note file to read (e.g. 'todo.md')
    pub filename: String,
}

/// Parameters for `search_notes`
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct SearchNotesParams {
    /// Filter by filename (case-insensitive, partial match)
    pub name: Option<String>,
    /// Filter by full filepath (case-insensitive, partial match)
    pub filepath: Option<String>,
    /// Filter by date. Use 'YYYY-MM-DD' for exact date, 'before:YYYY-MM-DD',
    /// 'after:YYYY-MM-DD', or 'between:YYYY-MM-DD,YYYY-MM-DD'
    pub date: Option<String>,
}

/// MCP service over a [`NoteTools`] dispatcher.
///
/// Operation failures come back as tool results flagged `isError`; only
/// unknown tools and arguments that don't fit the schema are protocol errors.
#[derive(Clone)]
pub struct NotesService {
    tools: NoteTools,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl NotesService {
    pub fn new(tools: NoteTools) -> Self {
        Self {
            tools,
            tool_router: Self::tool_router(),
        }
    }

    pub fn tools(&self) -> &NoteTools {
        &self.tools
    }

    #[tool(description = "Save a markdown note to the notes directory")]
    async fn save_note(
        &self,
        Parameters(params): Parameters<SaveNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(
            "save_note",
            self.tools.save_note(&params.filename, &params.content),
        ))
    }

    #[tool(description = "List all saved dev notes")]
    async fn list_notes(&self) -> Result<CallToolResult, McpError> {
        Ok(tool_result("list_notes", self.tools.list_notes()))
    }

    #[tool(description = "Read a specific dev note by filename")]
    async fn read_note(
        &self,
        Parameters(params): Parameters<ReadNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result("read_note", self.tools.read_note(&params.filename)))
    }

    #[tool(description = "Search and filter dev notes by name, filepath, and/or date")]
    async fn search_notes(
        &self,
        Parameters(params): Parameters<SearchNotesParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.tools.search_notes(
            params.name.as_deref(),
            params.filepath.as_deref(),
            params.date.as_deref(),
        );
        Ok(tool_result("search_notes", result))
    }
}

/// Wraps an operation's text, or its error, as a single text block.
fn tool_result(tool: &str, result: ToolResult) -> CallToolResult {
    match result {
        Ok(text) => {
            debug!(tool, "tool succeeded");
            CallToolResult::success(vec![Content::text(text)])
        }
        Err(err) => {
            warn!(tool, error = %err, "tool failed");
            CallToolResult::error(vec![Content::text(format!("Error: {}", err))])
        }
    }
}

impl ServerHandler for NotesService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Markdown dev notes kept in a single directory. Use list_notes or \
                 search_notes to find a note, then read_note to fetch it."
                    .to_string(),
            ),
        }
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        use rmcp::handler::server::tool::ToolCallContext;

        info!(tool = %request.name, "calling tool");
        let tcc = ToolCallContext::new(self, request, context);
        self.tool_router.call(tcc).await
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let mut tools = self.tool_router.list_all();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(ListToolsResult::with_all_items(tools))
    }
}

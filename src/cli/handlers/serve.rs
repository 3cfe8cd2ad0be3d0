//! Serve command handler: the stdio transport.

use anyhow::{Context, Result};
use tokio::runtime::Builder;

use crate::server::{NoteTools, NotesService, serve_stdio};

pub fn handle_serve(tools: NoteTools) -> Result<()> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let result = runtime.block_on(serve_stdio(NotesService::new(tools)));
    // a blocked stdin read must not hold up exit
    runtime.shutdown_background();
    result.context("stdio transport failed")
}

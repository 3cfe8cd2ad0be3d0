//! Search command handler.

use anyhow::{Context, Result};

use crate::cli::SearchArgs;
use crate::server::NoteTools;

pub fn handle_search(args: &SearchArgs, tools: &NoteTools) -> Result<()> {
    let text = tools
        .search_notes(
            args.name.as_deref(),
            args.filepath.as_deref(),
            args.date.as_deref(),
        )
        .context("search failed")?;
    println!("{}", text);
    Ok(())
}

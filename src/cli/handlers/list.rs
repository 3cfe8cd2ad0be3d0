//! List command handler.

use anyhow::Result;

use crate::server::NoteTools;

pub fn handle_list(tools: &NoteTools) -> Result<()> {
    let text = tools.list_notes()?;
    println!("{}", text);
    Ok(())
}

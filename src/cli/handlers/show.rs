//! Show command handler.

use anyhow::Result;

use crate::cli::ShowArgs;
use crate::server::NoteTools;

/// Prints the note's raw content, or the not-found message.
pub fn handle_show(args: &ShowArgs, tools: &NoteTools) -> Result<()> {
    let text = tools.read_note(&args.filename)?;
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
    Ok(())
}

//! Save command handler.

use anyhow::{Context, Result};
use std::io::{self, Read};

use crate::cli::SaveArgs;
use crate::server::NoteTools;

pub fn handle_save(args: &SaveArgs, tools: &NoteTools) -> Result<()> {
    let content = match &args.content {
        Some(content) => content.clone(),
        None => read_content(io::stdin().lock())?,
    };

    let text = tools
        .save_note(&args.filename, &content)
        .with_context(|| format!("failed to save note: {}", args.filename))?;
    println!("{}", text);
    Ok(())
}

pub(crate) fn read_content<R: Read>(mut reader: R) -> Result<String> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .context("failed to read note content from stdin")?;
    Ok(content)
}

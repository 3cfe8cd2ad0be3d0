//! dev-notes - a flat directory of markdown notes served over MCP

pub mod cli;
pub mod domain;
pub mod infra;
pub mod server;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_completions, handle_list, handle_save, handle_search, handle_serve, handle_show,
    },
    logging,
};
use infra::NoteStore;
use server::NoteTools;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    logging::init(cli.verbose, config.log_level.as_deref())?;

    match &cli.command {
        Some(Command::Completions(args)) => handle_completions(args),
        None | Some(Command::Serve) => handle_serve(note_tools(&cli, &config)?),
        Some(Command::Save(args)) => handle_save(args, &note_tools(&cli, &config)?),
        Some(Command::List) => handle_list(&note_tools(&cli, &config)?),
        Some(Command::Show(args)) => handle_show(args, &note_tools(&cli, &config)?),
        Some(Command::Search(args)) => handle_search(args, &note_tools(&cli, &config)?),
    }
}

fn note_tools(cli: &Cli, config: &Config) -> Result<NoteTools> {
    let notes_dir = config.notes_dir(cli.dir.as_ref())?;
    debug!(notes_dir = %notes_dir.display(), "resolved notes directory");
    Ok(NoteTools::new(NoteStore::new(notes_dir)))
}

//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// dev-notes - a markdown notes directory served over MCP
#[derive(Parser, Debug)]
#[command(name = "dev-notes", version, about, long_about = None)]
pub struct Cli {
    /// Notes directory (overrides config file; default ~/dev-notes)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the note tools over stdio (JSON-RPC, one message per line)
    Serve,

    /// Save a note, overwriting any note with the same name
    Save(SaveArgs),

    /// List notes
    #[command(name = "ls")]
    List,

    /// Print a note's contents
    Show(ShowArgs),

    /// Filter notes by name, path and modification date
    Search(SearchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `save` command
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Note filename (`.md` is appended if missing)
    pub filename: String,

    /// Note content (read from stdin when omitted)
    pub content: Option<String>,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note filename (`.md` is appended if missing)
    pub filename: String,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Filename substring (case-insensitive)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Full path substring (case-insensitive)
    #[arg(short = 'p', long = "path")]
    pub filepath: Option<String>,

    /// YYYY-MM-DD, before:YYYY-MM-DD, after:YYYY-MM-DD or
    /// between:YYYY-MM-DD,YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

//! Command handlers for the CLI.

mod completions;
mod list;
mod save;
mod search;
mod serve;
mod show;


pub use completions::handle_completions;
pub use list::handle_list;
pub use save::handle_save;
pub use search::handle_search;
pub use serve::handle_serve;
pub use show::handle_show;

#[cfg(test)]
pub(crate) use save::read_content;

//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, a fluent command builder using
//! `assert_cmd`, and helpers for scripting JSON-RPC sessions.

mod command;
mod env;
mod rpc;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::NotesCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use rpc::{RpcSession, parse_responses, tool_text};

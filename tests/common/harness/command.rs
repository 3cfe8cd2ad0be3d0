//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test binaries
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `dev-notes` binary.
///
/// Every command runs with `HOME` and `XDG_CONFIG_HOME` pointed at an
/// isolated directory when one is given, so a user's config file never
/// leaks into a test.
pub struct NotesCommand {
    args: Vec<String>,
    home: Option<PathBuf>,
    stdin: Option<Vec<u8>>,
}

impl NotesCommand {
    /// Creates a new command for the `dev-notes` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            home: None,
            stdin: None,
        }
    }

    /// Sets the `--dir` option to specify the notes directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Uses `path` as the home and config directory.
    pub fn home(mut self, path: &Path) -> Self {
        self.home = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Feeds `input` to the process on stdin.
    pub fn stdin(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("dev-notes").expect("Failed to find dev-notes binary");
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        if let Some(home) = &self.home {
            cmd.env("HOME", home);
            cmd.env("XDG_CONFIG_HOME", home.join(".config"));
        }
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `serve` command.
    pub fn serve(self) -> Self {
        self.args(["serve"])
    }

    /// Configures for the `save` command with inline content.
    pub fn save(self, filename: &str, content: &str) -> Self {
        self.args(["save", filename, content])
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `show` command.
    pub fn show(self, filename: &str) -> Self {
        self.args(["show", filename])
    }

    /// Configures for the `search` command; add filters with `args`.
    pub fn search(self) -> Self {
        self.args(["search"])
    }
}

impl Default for NotesCommand {
    fn default() -> Self {
        Self::new()
    }
}

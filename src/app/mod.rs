//! Interactive dashboard shell.
//!
//! This module provides the line-oriented front end used by the `shell`
//! subcommand: command parsing and the event loop that runs fetches in the
//! background while filters are edited.

pub mod command;
pub mod shell;

// Re-export public API
pub use command::{parse_command, CommandError, ShellCommand, HELP};
pub use shell::run_shell;

//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, export names)
//! - Column headers shared by the table and the spreadsheet
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command, SearchArgs};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};

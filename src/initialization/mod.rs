//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger
//! - HTTP client (timeouts, user agent)
//! - API base URL
//!
//! All initialization functions return proper error types for error handling.

mod base_url;
mod client;
mod logger;

// Re-export public API
pub use base_url::parse_base_url;
pub use client::init_client;
pub use logger::init_logger_with;

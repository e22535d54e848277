//! Error types.
//!
//! This module provides:
//! - Initialization errors (logger, HTTP client, base URL)
//! - Fetch errors, folded into a failed `FetchResult` at the fetch boundary
//! - Export errors for workbook writing
//! - Filter name errors for keyed filter updates

mod types;

// Re-export public API
pub use types::{ExportError, FetchError, InitializationError, UnknownFilter};

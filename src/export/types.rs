//! Export types.

use std::path::PathBuf;

/// What an export wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of data rows (the header row is not counted)
    pub rows: usize,
    /// Workbook path
    pub path: PathBuf,
}

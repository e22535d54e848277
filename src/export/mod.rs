//! Spreadsheet export of the current attendance rows.
//!
//! Rows are flattened into [`ExportRow`]s with the same `N/A` defaults as the
//! table, then written to a single-sheet workbook.

mod row;
mod types;
mod xlsx;

pub use row::ExportRow;
pub use types::ExportSummary;
pub use xlsx::export_xlsx;

//! XLSX export.

use std::path::Path;

use log::info;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::config::{COLUMN_HEADERS, FIRST_COUNT_COLUMN, SHEET_NAME};
use crate::error_handling::ExportError;
use crate::models::AttendanceRecord;

use super::row::ExportRow;
use super::types::ExportSummary;

/// Writes `rows` to a workbook at `path`.
///
/// The workbook has one sheet, named `Attendance`: a header row followed by
/// one row per record. Text columns are written as strings and the counts as
/// numbers. With no rows nothing is written and `Ok(None)` is returned, so
/// repeating an empty export is harmless.
///
/// # Errors
///
/// Returns `ExportError::Workbook` if the workbook cannot be built or saved.
pub fn export_xlsx(
    rows: &[AttendanceRecord],
    path: &Path,
) -> Result<Option<ExportSummary>, ExportError> {
    if rows.is_empty() {
        info!("No attendance rows to export");
        return Ok(None);
    }

    let export_rows: Vec<ExportRow> = rows.iter().map(ExportRow::from).collect();
    write_workbook(&export_rows, path).map_err(|source| ExportError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Exported {} attendance row(s) to {}",
        export_rows.len(),
        path.display()
    );
    Ok(Some(ExportSummary {
        rows: export_rows.len(),
        path: path.to_path_buf(),
    }))
}

fn write_workbook(rows: &[ExportRow], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in COLUMN_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let excel_row = (index + 1) as u32;
        for (col, text) in row.text_cells().into_iter().enumerate() {
            worksheet.write_string(excel_row, col as u16, text)?;
        }
        for (offset, count) in row.count_cells().into_iter().enumerate() {
            worksheet.write_number(excel_row, (FIRST_COUNT_COLUMN + offset) as u16, count as f64)?;
        }
    }
    worksheet.autofit();

    workbook.save(path)?;
    Ok(())
}

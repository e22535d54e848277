//! Text table rendering for attendance rows.
//!
//! A pure projection of the current rows: no sorting, filtering, or paging.
//! Missing contact and address fields show as `N/A`; counts are printed as-is.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

use crate::config::{COLUMN_HEADERS, FIRST_COUNT_COLUMN, NO_DATA_MESSAGE};
use crate::models::AttendanceRecord;

const COLUMN_SEPARATOR: &str = " | ";

/// Projects rows into display cells, in [`COLUMN_HEADERS`] order.
pub fn table_rows(rows: &[AttendanceRecord]) -> Vec<[String; 11]> {
    rows.iter()
        .map(|row| {
            [
                row.date.clone(),
                row.spot_name.clone(),
                row.spot_code.clone(),
                row.mobile_number().to_string(),
                row.village().to_string(),
                row.union().to_string(),
                row.upozila().to_string(),
                row.district().to_string(),
                row.female.to_string(),
                row.male.to_string(),
                row.child.to_string(),
            ]
        })
        .collect()
}

fn pad(out: &mut String, cell: &str, width: usize, right_align: bool) {
    let fill = width.saturating_sub(cell.width());
    if right_align {
        out.push_str(&" ".repeat(fill));
        out.push_str(cell);
    } else {
        out.push_str(cell);
        out.push_str(&" ".repeat(fill));
    }
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize]) {
    let mut line = String::new();
    for (col, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if col > 0 {
            line.push_str(COLUMN_SEPARATOR);
        }
        pad(&mut line, cell, *width, col >= FIRST_COUNT_COLUMN);
    }
    let _ = writeln!(out, "{}", line.trim_end());
}

/// Renders rows as an aligned text table with a header.
///
/// With no rows, the body is a single line spanning the table that says no
/// attendance was found.
pub fn render_table(rows: &[AttendanceRecord]) -> String {
    let cells = table_rows(rows);

    let mut widths: Vec<usize> = COLUMN_HEADERS.iter().map(|h| h.width()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }
    let total_width =
        widths.iter().sum::<usize>() + COLUMN_SEPARATOR.len() * (widths.len() - 1);

    let mut out = String::new();
    push_line(&mut out, &COLUMN_HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    if cells.is_empty() {
        let fill = total_width.saturating_sub(NO_DATA_MESSAGE.width()) / 2;
        let _ = writeln!(out, "{}{}", " ".repeat(fill), NO_DATA_MESSAGE);
        return out;
    }

    for row in &cells {
        let refs: Vec<&str> = row.iter().map(String::as_str).collect();
        push_line(&mut out, &refs, &widths);
    }
    out
}

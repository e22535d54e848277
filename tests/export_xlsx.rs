// Workbook export: sheet layout and placeholder values, checked by reading the
// written .xlsx archive back.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tempfile::TempDir;

use attendance_dashboard::config::{COLUMN_HEADERS, SHEET_NAME};
use attendance_dashboard::export::export_xlsx;
use attendance_dashboard::{Address, AttendanceRecord};

fn record(spot_code: &str, village: Option<&str>, mobile: Option<&str>) -> AttendanceRecord {
    AttendanceRecord {
        date: "2024-01-15".to_string(),
        spot_id: format!("id-{spot_code}"),
        spot_name: format!("Spot {spot_code}"),
        spot_code: spot_code.to_string(),
        concern_mobile_number: mobile.map(str::to_string),
        address: Some(Address {
            village: village.map(str::to_string),
            union: Some("Kahaloo".to_string()),
            upozila: Some("Kahaloo".to_string()),
            district: Some("Bogura".to_string()),
            google_location: None,
        }),
        female: 12,
        male: 9,
        child: 4,
        spot_details: None,
    }
}

fn read_part(path: &Path, part: &str) -> String {
    let file = File::open(path).expect("workbook exists");
    let mut archive = zip::ZipArchive::new(file).expect("workbook is a zip archive");
    let mut entry = archive.by_name(part).expect("part exists");
    let mut xml = String::new();
    entry.read_to_string(&mut xml).expect("part is utf-8");
    xml
}

/// Text of every `<t>` element in the shared string table, in order.
fn shared_strings(path: &Path) -> Vec<String> {
    let xml = read_part(path, "xl/sharedStrings.xml");
    xml.split("<t>")
        .skip(1)
        .filter_map(|chunk| chunk.split("</t>").next())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_export_writes_header_and_rows() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("attendance.xlsx");
    let rows = vec![
        record("RS-01", Some("Rampur"), Some("01711000000")),
        record("KM-02", None, None),
        record("SP-03", Some(""), Some("01811000000")),
    ];

    let summary = export_xlsx(&rows, &path)
        .expect("export succeeds")
        .expect("rows were written");
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.path, path);

    let workbook = read_part(&path, "xl/workbook.xml");
    assert!(workbook.contains(&format!("name=\"{SHEET_NAME}\"")));

    let sheet = read_part(&path, "xl/worksheets/sheet1.xml");
    assert_eq!(sheet.matches("<row ").count(), rows.len() + 1);

    let strings = shared_strings(&path);
    assert_eq!(&strings[..COLUMN_HEADERS.len()], &COLUMN_HEADERS[..]);
    assert!(strings.iter().any(|s| s == "N/A"));
    assert!(strings.iter().any(|s| s == "Rampur"));
    // Counts are numbers, not strings.
    assert!(!strings.iter().any(|s| s == "12"));
    assert!(sheet.contains("<v>12</v>"));
}

#[test]
fn test_export_with_no_rows_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("attendance.xlsx");

    assert!(export_xlsx(&[], &path).expect("no error").is_none());
    assert!(!path.exists());
}

#[test]
fn test_export_overwrites_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("attendance.xlsx");
    std::fs::write(&path, b"stale").expect("write stale file");

    export_xlsx(&[record("RS-01", Some("Rampur"), None)], &path).expect("export succeeds");
    let sheet = read_part(&path, "xl/worksheets/sheet1.xml");
    assert_eq!(sheet.matches("<row ").count(), 2);
}

#[test]
fn test_export_to_missing_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("no_such_dir").join("attendance.xlsx");

    let err = export_xlsx(&[record("RS-01", None, None)], &path).unwrap_err();
    assert!(err.to_string().contains("attendance.xlsx"));
}

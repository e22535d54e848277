//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including API endpoints, timeouts, and the names of exported artifacts.

/// Base URL of the attendance API when `--base-url` is not given.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Spot list endpoint, relative to the base URL.
pub const SPOT_ENDPOINT: &str = "api/v1/spot";
/// Attendance listing endpoint, relative to the base URL.
pub const ATTENDANCE_ENDPOINT: &str = "api/v1/attendance/get-all-attendance";

// Network operation timeouts
/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for API requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("attendance_dashboard/", env!("CARGO_PKG_VERSION"));

// Fetch outcome messages
/// Message carried by a successful fetch result
pub const SUCCESS_MESSAGE: &str = "Success";
/// Message carried by a failed fetch result (all failures share it)
pub const FAILURE_MESSAGE: &str = "Error fetching data";

/// Placeholder for absent contact and address fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder row shown when a fetch produced no rows.
pub const NO_DATA_MESSAGE: &str =
    "No attendance found. Please adjust your filters and search again.";

// Spreadsheet export
/// Default export file name
pub const EXPORT_FILE_NAME: &str = "attendance.xlsx";
/// Name of the single worksheet in the exported workbook
pub const SHEET_NAME: &str = "Attendance";

/// Column headers, in display and export order.
///
/// The table and the spreadsheet both use this order. The last three
/// columns are numeric counts.
pub const COLUMN_HEADERS: [&str; 11] = [
    "Date",
    "Spot Name",
    "Spot Code",
    "Mobile Number",
    "Village",
    "Union",
    "Upozila",
    "District",
    "Female",
    "Male",
    "Child",
];

/// Index of the first numeric column in [`COLUMN_HEADERS`].
pub const FIRST_COUNT_COLUMN: usize = 8;

//! attendance_dashboard library: query, display, and export attendance summaries
//!
//! This library queries a remote attendance API with a set of filters (date or
//! date range, spot, address hierarchy, attendance type), renders the returned
//! rows as a text table, and exports them to an `.xlsx` workbook.
//!
//! # Example
//!
//! ```no_run
//! use attendance_dashboard::{ApiClient, Config, Dashboard, FilterKey};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let api = ApiClient::new(&Config::default())?;
//! let mut dashboard = Dashboard::new(api);
//! dashboard.mount().await;
//!
//! dashboard.filters_mut().set_select(FilterKey::District, "Bogura");
//! let result = dashboard.search().await;
//! println!("{} row(s): {}", result.rows.len(), result.message);
//!
//! dashboard.export(Path::new("attendance.xlsx"))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod config;
mod dashboard;
pub mod error_handling;
pub mod export;
mod fetch;
mod filters;
pub mod initialization;
mod models;
pub mod table;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use dashboard::{Dashboard, LoadState};
pub use fetch::ApiClient;
pub use filters::{AttendanceType, FilterKey, FilterState};
pub use models::{or_not_available, Address, AttendanceRecord, FetchResult, SpotOption};

//! Command-line interface definition.
//!
//! `Cli` is generated by `clap` from the field attributes. Global options
//! configure the API client and the logger; the subcommand picks between a
//! one-shot search, the spot listing, and the interactive dashboard shell.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, EXPORT_FILE_NAME,
};
use crate::config::types::{Config, LogFormat, LogLevel};
use crate::filters::{AttendanceType, FilterKey, FilterState};

/// Command-line options and configuration.
///
/// # Examples
///
/// ```bash
/// # Attendance for one district over a date range, exported to attendance.xlsx
/// attendance_dashboard search --district Bogura --start-date 2024-01-01 --end-date 2024-01-31 --export
///
/// # Interactive dashboard against a remote API
/// attendance_dashboard --base-url https://reports.example.org shell
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "attendance_dashboard",
    about = "Filters, displays, and exports attendance summaries from the attendance API."
)]
pub struct Cli {
    /// Base URL of the attendance API
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch attendance once with the given filters and print the table
    Search(SearchArgs),
    /// List the selectable spots
    Spots,
    /// Interactive dashboard: edit filters, search, export
    Shell,
}

/// Filters and output options for the `search` subcommand.
#[derive(Debug, Default, Args)]
pub struct SearchArgs {
    /// Specific date
    #[arg(long)]
    pub date: Option<String>,

    /// Start of the date range
    #[arg(long)]
    pub start_date: Option<String>,

    /// End of the date range
    #[arg(long)]
    pub end_date: Option<String>,

    /// Spot code
    #[arg(long)]
    pub spot_code: Option<String>,

    /// Concern mobile number
    #[arg(long = "mobile")]
    pub concern_mobile_number: Option<String>,

    #[arg(long)]
    pub village: Option<String>,

    #[arg(long)]
    pub union: Option<String>,

    #[arg(long)]
    pub upozila: Option<String>,

    #[arg(long)]
    pub district: Option<String>,

    /// Attendance type: female|male|child (all types when omitted)
    #[arg(long, value_enum)]
    pub attendance_type: Option<AttendanceType>,

    /// Export the fetched rows to a spreadsheet (default: attendance.xlsx)
    #[arg(long, num_args = 0..=1, default_missing_value = EXPORT_FILE_NAME)]
    pub export: Option<PathBuf>,
}

impl Cli {
    /// Library configuration derived from the global options.
    pub fn config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }
}

impl SearchArgs {
    /// Builds the filter state described by the flags.
    ///
    /// Flags that were not given stay empty, which keeps them out of the query.
    pub fn filters(&self) -> FilterState {
        let mut filters = FilterState::default();
        let text_fields = [
            (FilterKey::Date, &self.date),
            (FilterKey::StartDate, &self.start_date),
            (FilterKey::EndDate, &self.end_date),
            (FilterKey::SpotCode, &self.spot_code),
            (FilterKey::ConcernMobileNumber, &self.concern_mobile_number),
            (FilterKey::Village, &self.village),
            (FilterKey::Union, &self.union),
            (FilterKey::Upozila, &self.upozila),
            (FilterKey::District, &self.district),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                filters.set_select(key, value.as_str());
            }
        }
        if let Some(attendance_type) = self.attendance_type {
            filters.set_select(FilterKey::AttendanceType, attendance_type.as_ref());
        }
        filters
    }
}

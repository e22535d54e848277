//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured API base URL cannot be used.
    #[error("Invalid API base URL '{url}': {reason}")]
    BaseUrlError {
        /// The rejected URL as given
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Error types for API requests.
///
/// The dashboard does not act on the distinction: every variant turns into the
/// same failed fetch result. The variants exist so the log says what went wrong.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        /// Endpoint URL
        endpoint: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// The server answered with a non-success status.
    #[error("{endpoint} responded with status {status}")]
    Status {
        /// Endpoint URL
        endpoint: String,
        /// Response status
        status: StatusCode,
    },

    /// The body was not the expected JSON envelope.
    #[error("Malformed response from {endpoint}: {source}")]
    Decode {
        /// Endpoint URL
        endpoint: String,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

/// Error types for spreadsheet export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Building or saving the workbook failed.
    #[error("Failed to write workbook {path}: {source}")]
    Workbook {
        /// Target file
        path: PathBuf,
        /// Underlying writer error
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

/// A keyed filter update named a field that does not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown filter '{0}'")]
pub struct UnknownFilter(pub String);

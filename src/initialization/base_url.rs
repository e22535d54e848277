//! API base URL validation and normalization.

use log::debug;
use url::Url;

use crate::error_handling::InitializationError;

/// Validates and normalizes the API base URL.
///
/// The URL must parse and use the http or https scheme. The path is given a
/// trailing slash so that relative endpoint paths are appended to it instead
/// of replacing its last segment (`http://host/reports` + `api/v1/spot` must
/// become `http://host/reports/api/v1/spot`).
///
/// # Errors
///
/// Returns `InitializationError::BaseUrlError` when the URL is malformed,
/// uses another scheme, or carries a query or fragment.
pub fn parse_base_url(raw: &str) -> Result<Url, InitializationError> {
    let reject = |reason: String| InitializationError::BaseUrlError {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| reject(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(reject(format!("unsupported scheme '{other}'"))),
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(reject("query strings and fragments are not allowed".to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    debug!("Using API base URL {url}");
    Ok(url)
}

//! Attendance API client.
//!
//! Two read-only endpoints: the spot list, fetched once at startup, and the
//! attendance listing, fetched with the non-empty filters as query parameters.
//! Attendance failures of every kind fold into the same failed `FetchResult`.

mod envelope;

use std::sync::Arc;

use log::{debug, error, info};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{Config, ATTENDANCE_ENDPOINT, SPOT_ENDPOINT};
use crate::error_handling::{FetchError, InitializationError};
use crate::filters::FilterState;
use crate::initialization::{init_client, parse_base_url};
use crate::models::{AttendanceRecord, FetchResult, SpotListResponse, SpotOption};

use envelope::AttendanceEnvelope;

/// Client for the attendance API.
///
/// Cheap to clone: the HTTP client is shared, so in-flight fetches can own a
/// copy while the dashboard keeps its own.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Arc<reqwest::Client>,
    spot_url: Url,
    attendance_url: Url,
}

impl ApiClient {
    /// Builds a client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = init_client(config)?;
        Self::with_client(client, base_url)
    }

    /// Builds a client around an existing HTTP client.
    ///
    /// `base_url` should come from [`parse_base_url`] so that its path ends in `/`.
    pub fn with_client(
        client: Arc<reqwest::Client>,
        base_url: Url,
    ) -> Result<Self, InitializationError> {
        let join = |endpoint: &str| {
            base_url
                .join(endpoint)
                .map_err(|e| InitializationError::BaseUrlError {
                    url: base_url.to_string(),
                    reason: e.to_string(),
                })
        };
        Ok(Self {
            spot_url: join(SPOT_ENDPOINT)?,
            attendance_url: join(ATTENDANCE_ENDPOINT)?,
            client,
        })
    }

    /// Full URL of the attendance endpoint.
    pub fn attendance_url(&self) -> &Url {
        &self.attendance_url
    }

    /// Full URL of the spot endpoint.
    pub fn spot_url(&self) -> &Url {
        &self.spot_url
    }

    /// Queries attendance with the non-empty filters.
    ///
    /// Never fails: transport, status, and decode errors are logged and
    /// reported as [`FetchResult::failure`].
    pub async fn fetch_attendance(&self, filters: &FilterState) -> FetchResult {
        let params = filters.query_params();
        debug!("Fetching attendance with {filters}");
        match self.try_fetch_attendance(&params).await {
            Ok(rows) => {
                info!("Fetched {} attendance row(s)", rows.len());
                FetchResult::success(rows)
            }
            Err(e) => {
                error!("Error fetching attendance data: {e}");
                FetchResult::failure()
            }
        }
    }

    async fn try_fetch_attendance(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<Vec<AttendanceRecord>, FetchError> {
        let envelope: AttendanceEnvelope = self.get_json(&self.attendance_url, params).await?;
        envelope.into_rows().map_err(|source| FetchError::Decode {
            endpoint: self.attendance_url.to_string(),
            source,
        })
    }

    /// Fetches the selectable spots. No parameters, no retry.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on transport, status, or decode failure.
    pub async fn fetch_spots(&self) -> Result<Vec<SpotOption>, FetchError> {
        let response: SpotListResponse = self.get_json(&self.spot_url, &[]).await?;
        debug!(
            "Spot list response: success={} status {} '{}' ({} spot(s))",
            response.success,
            response.status_code,
            response.message,
            response.data.len()
        );
        Ok(response.data)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        params: &[(&'static str, String)],
    ) -> Result<T, FetchError> {
        let endpoint = url.as_str();
        let response = self
            .client
            .get(url.clone())
            .query(params)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

//! Dashboard state: filters, spot list, the current result, and the loading flag.
//!
//! Filter edits only change state. Fetches happen on `mount`, `search`,
//! `clear_filters`, and `reload`. Each finished fetch replaces the current
//! result, in the order the responses arrive.

use std::future::Future;
use std::path::Path;

use log::{info, warn};

use crate::error_handling::{ExportError, FetchError};
use crate::export::{export_xlsx, ExportSummary};
use crate::fetch::ApiClient;
use crate::filters::FilterState;
use crate::models::{AttendanceRecord, FetchResult, SpotOption};

/// Whether an attendance fetch is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
}

/// One dashboard instance.
#[derive(Debug)]
pub struct Dashboard {
    api: ApiClient,
    filters: FilterState,
    spots: Option<Vec<SpotOption>>,
    result: Option<FetchResult>,
    load_state: LoadState,
}

impl Dashboard {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            filters: FilterState::default(),
            spots: None,
            result: None,
            load_state: LoadState::Idle,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    /// Spot list, or `None` if it has not loaded (spot selection is unavailable).
    pub fn spots(&self) -> Option<&[SpotOption]> {
        self.spots.as_deref()
    }

    /// `CODE-Name` labels for the spot selection list.
    pub fn spot_choices(&self) -> Vec<String> {
        self.spots
            .iter()
            .flatten()
            .map(SpotOption::label)
            .collect()
    }

    /// Whether `code` is one of the loaded spots.
    pub fn has_spot(&self, code: &str) -> bool {
        self.spots
            .iter()
            .flatten()
            .any(|spot| spot.spot_code == code)
    }

    pub fn result(&self) -> Option<&FetchResult> {
        self.result.as_ref()
    }

    /// Rows of the current result (empty before the first fetch and after a failure).
    pub fn rows(&self) -> &[AttendanceRecord] {
        self.result.as_ref().map_or(&[], |r| r.rows.as_slice())
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// One-time spot list fetch.
    ///
    /// A failure is logged and leaves the spot list unset.
    pub async fn load_spots(&mut self) {
        let outcome = self.api.fetch_spots().await;
        self.apply_spots(outcome);
    }

    fn apply_spots(&mut self, outcome: Result<Vec<SpotOption>, FetchError>) {
        match outcome {
            Ok(spots) => {
                info!("Loaded {} spot(s)", spots.len());
                self.spots = Some(spots);
            }
            Err(e) => {
                warn!("Spot list unavailable: {e}");
                self.spots = None;
            }
        }
    }

    /// Starts an attendance fetch with a snapshot of the current filters.
    ///
    /// Sets the loading flag. The returned future owns everything it needs, so
    /// it can be spawned; hand its output to [`Dashboard::finish_fetch`].
    /// Nothing stops a second fetch from starting before the first finishes.
    pub fn begin_fetch(&mut self) -> impl Future<Output = FetchResult> + Send + 'static {
        self.load_state = LoadState::Loading;
        let api = self.api.clone();
        let filters = self.filters.clone();
        async move { api.fetch_attendance(&filters).await }
    }

    /// Installs a finished fetch as the current result and clears the loading flag.
    pub fn finish_fetch(&mut self, result: FetchResult) -> &FetchResult {
        self.load_state = LoadState::Idle;
        self.result.insert(result)
    }

    async fn refresh(&mut self) -> &FetchResult {
        let pending = self.begin_fetch();
        let result = pending.await;
        self.finish_fetch(result)
    }

    /// Initial load: the spot list and attendance with the current filters,
    /// requested concurrently.
    pub async fn mount(&mut self) -> &FetchResult {
        let pending = self.begin_fetch();
        let (spots, result) = tokio::join!(self.api.fetch_spots(), pending);
        self.apply_spots(spots);
        self.finish_fetch(result)
    }

    /// Fetches attendance with the current filters.
    pub async fn search(&mut self) -> &FetchResult {
        self.refresh().await
    }

    /// Resets the filters and fetches once.
    pub async fn clear_filters(&mut self) -> &FetchResult {
        self.filters.reset();
        self.refresh().await
    }

    /// Drops filters, result, and spot list.
    pub fn reset(&mut self) {
        self.filters.reset();
        self.result = None;
        self.spots = None;
        self.load_state = LoadState::Idle;
    }

    /// Full reset followed by a fresh mount.
    pub async fn reload(&mut self) -> &FetchResult {
        self.reset();
        self.mount().await
    }

    /// Exports the current rows. Does nothing when there are none.
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] if the workbook cannot be written.
    pub fn export(&self, path: &Path) -> Result<Option<ExportSummary>, ExportError> {
        export_xlsx(self.rows(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::filters::FilterKey;

    fn offline_dashboard() -> Dashboard {
        // Port 9 (discard) on localhost: nothing listens, requests fail fast.
        let api = ApiClient::new(&Config {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_seconds: 2,
            ..Default::default()
        })
        .expect("valid config");
        Dashboard::new(api)
    }

    #[test]
    fn test_new_dashboard_is_idle_and_empty() {
        let dashboard = offline_dashboard();
        assert_eq!(dashboard.load_state(), LoadState::Idle);
        assert!(dashboard.result().is_none());
        assert!(dashboard.rows().is_empty());
        assert!(dashboard.spots().is_none());
        assert!(dashboard.spot_choices().is_empty());
    }

    #[test]
    fn test_begin_and_finish_fetch_toggle_loading() {
        let mut dashboard = offline_dashboard();
        let _pending = dashboard.begin_fetch();
        assert!(dashboard.is_loading());
        dashboard.finish_fetch(FetchResult::failure());
        assert!(!dashboard.is_loading());
        assert_eq!(dashboard.result(), Some(&FetchResult::failure()));
    }

    #[test]
    fn test_filter_edits_do_not_fetch() {
        let mut dashboard = offline_dashboard();
        dashboard
            .filters_mut()
            .set_text("district", "Bogura")
            .expect("known field");
        assert_eq!(dashboard.load_state(), LoadState::Idle);
        assert!(dashboard.result().is_none());
        assert_eq!(dashboard.filters().get(FilterKey::District), "Bogura");
    }

    #[tokio::test]
    async fn test_unreachable_api_yields_failure_result() {
        let mut dashboard = offline_dashboard();
        let result = dashboard.mount().await.clone();
        assert!(!result.success);
        assert!(result.rows.is_empty());
        assert!(dashboard.spots().is_none());
        assert!(!dashboard.is_loading());
    }

    #[test]
    fn test_export_without_result_is_noop() {
        let dashboard = offline_dashboard();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attendance.xlsx");
        assert!(dashboard.export(&path).unwrap().is_none());
        assert!(!path.exists());
    }
}

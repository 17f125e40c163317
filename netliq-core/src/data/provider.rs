//! Series provider trait and structured error types.
//!
//! The SeriesProvider trait abstracts over the data source (FRED over HTTP,
//! or an in-memory mock in tests) so the pipeline can be exercised without a
//! network.

use chrono::NaiveDate;
use thiserror::Error;

/// One fetched series: a date-ordered sequence of observations.
///
/// Missing observations (the source's "no data" placeholder) are `f64::NAN`.
/// Immutable once returned by a provider.
#[derive(Debug, Clone)]
pub struct RawSeries {
    pub id: String,
    pub points: Vec<(NaiveDate, f64)>,
}

impl RawSeries {
    pub fn new(id: impl Into<String>, points: Vec<(NaiveDate, f64)>) -> Self {
        Self {
            id: id.into(),
            points,
        }
    }
}

/// Structured error types for data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("HTTP {status} fetching series '{series_id}'")]
    HttpStatus { series_id: String, status: u16 },

    #[error("series not found: {series_id}")]
    SeriesNotFound { series_id: String },

    #[error("malformed payload for series '{series_id}': {detail}")]
    MalformedPayload { series_id: String, detail: String },
}

/// Trait for series providers (FRED over HTTP, mocks in tests).
///
/// A provider returns all historically available points for a series
/// identifier, or an error. It never retries on its own.
pub trait SeriesProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch every available observation for a series identifier.
    fn fetch(&self, series_id: &str) -> Result<RawSeries, DataError>;
}

/// Progress callback for the multi-series fetch loop.
pub trait FetchProgress {
    /// Called when starting to fetch a series.
    fn on_start(&self, series_id: &str, index: usize, total: usize);

    /// Called when a series fetch completes.
    fn on_complete(&self, series_id: &str, result: &Result<usize, &DataError>);
}

/// Progress reporter that prints to stdout.
pub struct StdoutProgress;

impl FetchProgress for StdoutProgress {
    fn on_start(&self, series_id: &str, index: usize, total: usize) {
        println!("[{}/{}] Fetching {series_id}...", index + 1, total);
    }

    fn on_complete(&self, series_id: &str, result: &Result<usize, &DataError>) {
        match result {
            Ok(n) => println!("  OK: {series_id} ({n} observations)"),
            Err(e) => println!("  FAIL: {series_id}: {e}"),
        }
    }
}

/// Progress reporter that prints nothing.
pub struct SilentProgress;

impl FetchProgress for SilentProgress {
    fn on_start(&self, _series_id: &str, _index: usize, _total: usize) {}
    fn on_complete(&self, _series_id: &str, _result: &Result<usize, &DataError>) {}
}

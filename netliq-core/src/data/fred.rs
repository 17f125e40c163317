//! FRED data provider.
//!
//! Fetches one series at a time from the fredgraph CSV endpoint. The payload
//! is a two-column table (date, value) where the value column uses a literal
//! `"."` for days with no observation; those become NaN rather than a parse
//! failure. There is no retry — a failed fetch aborts the run.

use super::provider::{DataError, RawSeries, SeriesProvider};
use chrono::NaiveDate;
use std::time::Duration;

const FRED_CSV_URL: &str = "https://fred.stlouisfed.org/graph/fredgraph.csv";

/// FRED CSV provider.
pub struct FredProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl FredProvider {
    pub fn new() -> Self {
        Self::with_base_url(FRED_CSV_URL)
    }

    /// Point the provider at a different endpoint. Used by tests to target a
    /// local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        // FRED rejects requests without a browser-like user agent.
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn series_url(&self, series_id: &str) -> String {
        format!("{}?id={series_id}", self.base_url)
    }
}

impl Default for FredProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesProvider for FredProvider {
    fn name(&self) -> &str {
        "fred"
    }

    fn fetch(&self, series_id: &str) -> Result<RawSeries, DataError> {
        let url = self.series_url(series_id);

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DataError::NetworkUnreachable(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DataError::SeriesNotFound {
                series_id: series_id.to_string(),
            });
        }
        if !status.is_success() {
            return Err(DataError::HttpStatus {
                series_id: series_id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .map_err(|e| DataError::NetworkUnreachable(e.to_string()))?;

        parse_fred_csv(series_id, &body)
    }
}

/// Parse the fredgraph CSV payload into a RawSeries.
///
/// First stage of the parse-then-fill split: non-numeric value cells become
/// NaN here; forward-filling happens later in the alignment step. A date that
/// does not parse is a malformed payload. Duplicate dates resolve
/// last-value-wins.
pub fn parse_fred_csv(series_id: &str, text: &str) -> Result<RawSeries, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let mut points: Vec<(NaiveDate, f64)> = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| DataError::MalformedPayload {
            series_id: series_id.to_string(),
            detail: e.to_string(),
        })?;

        let date_field = record.get(0).ok_or_else(|| DataError::MalformedPayload {
            series_id: series_id.to_string(),
            detail: "row has no date column".into(),
        })?;
        let value_field = record.get(1).ok_or_else(|| DataError::MalformedPayload {
            series_id: series_id.to_string(),
            detail: format!("row for {date_field} has no value column"),
        })?;

        let date = NaiveDate::parse_from_str(date_field, "%Y-%m-%d").map_err(|_| {
            DataError::MalformedPayload {
                series_id: series_id.to_string(),
                detail: format!("unparsable date '{date_field}'"),
            }
        })?;

        // "." (or any non-numeric marker) means no observation that day.
        let value = value_field.trim().parse::<f64>().unwrap_or(f64::NAN);

        match points.last() {
            Some(&(last, _)) if last == date => {
                // Duplicate date: last value wins.
                let idx = points.len() - 1;
                points[idx] = (date, value);
            }
            _ => points.push((date, value)),
        }
    }

    if points.is_empty() {
        return Err(DataError::MalformedPayload {
            series_id: series_id.to_string(),
            detail: "payload contains no data rows".into(),
        });
    }

    points.sort_by_key(|&(date, _)| date);

    Ok(RawSeries::new(series_id, points))
}

//! Output records and JSON export.
//!
//! One `LiquidityRecord` per surviving business day. Numeric fields are
//! `Option<f64>` so a still-missing value serializes as an explicit `null`
//! (never omitted, never defaulted to zero).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One output row. Field names match the published JSON schema exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "WALCL")]
    pub walcl: Option<f64>,
    #[serde(rename = "WDTGAL")]
    pub wdtgal: Option<f64>,
    #[serde(rename = "RRPONTSYD")]
    pub rrpontsyd: Option<f64>,
    #[serde(rename = "NetLiquidity")]
    pub net_liquidity: Option<f64>,
    #[serde(rename = "YoY")]
    pub yoy: Option<f64>,
    #[serde(rename = "MoM")]
    pub mom: Option<f64>,
    #[serde(rename = "WoW")]
    pub wow: Option<f64>,
    #[serde(rename = "MA5")]
    pub ma5: Option<f64>,
    #[serde(rename = "MA20")]
    pub ma20: Option<f64>,
    #[serde(rename = "MA60")]
    pub ma60: Option<f64>,
}

/// NaN → None, so serde_json emits `null` instead of failing on NaN.
pub fn nullable(value: f64) -> Option<f64> {
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Write the records as a pretty-printed JSON array.
///
/// Serializes fully in memory first; the file is not touched until the whole
/// payload exists, so a failed run never leaves a partial output behind.
pub fn write_json(path: impl AsRef<Path>, records: &[LiquidityRecord]) -> Result<(), ReportError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).map_err(|e| ReportError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str) -> LiquidityRecord {
        LiquidityRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            walcl: Some(4.17e12),
            wdtgal: Some(3.5e11),
            rrpontsyd: Some(1.0e8),
            net_liquidity: Some(3.8199e12),
            yoy: None,
            mom: None,
            wow: Some(0.01),
            ma5: Some(3.8e12),
            ma20: None,
            ma60: None,
        }
    }

    #[test]
    fn nullable_maps_nan_to_none() {
        assert_eq!(nullable(f64::NAN), None);
        assert_eq!(nullable(1.5), Some(1.5));
        assert_eq!(nullable(0.0), Some(0.0));
    }

    #[test]
    fn serializes_exact_key_names_and_nulls() {
        let json = serde_json::to_value(record("2020-01-02")).unwrap();
        let obj = json.as_object().unwrap();

        let expected_keys = [
            "Date",
            "WALCL",
            "WDTGAL",
            "RRPONTSYD",
            "NetLiquidity",
            "YoY",
            "MoM",
            "WoW",
            "MA5",
            "MA20",
            "MA60",
        ];
        assert_eq!(obj.len(), expected_keys.len());
        for key in expected_keys {
            assert!(obj.contains_key(key), "missing key {key}");
        }

        assert_eq!(obj["Date"], "2020-01-02");
        assert!(obj["YoY"].is_null(), "missing fields serialize as null");
        assert!(obj["MA20"].is_null());
    }

    #[test]
    fn write_json_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let records = vec![record("2020-01-02"), record("2020-01-03")];
        write_json(&path, &records).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<LiquidityRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, records);
    }
}

//! Pipeline configuration.
//!
//! Every policy constant (series ids, scale multipliers, start date, lookback
//! offsets, moving-average windows) is an explicit value on `PipelineConfig`
//! so the transform is testable with injected parameters. `Default` is the
//! fixed production policy; a TOML file may override any subset of fields.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// One input series: its FRED identifier and the multiplier that brings it
/// onto the common dollar unit.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesConfig {
    pub id: String,
    pub scale: f64,
}

/// All parameters of one pipeline run.
///
/// Lookback offsets and windows are counts of business days.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Central bank balance sheet (WALCL, millions of dollars).
    pub balance_sheet: SeriesConfig,
    /// Treasury general account (WDTGAL, millions of dollars).
    pub treasury_account: SeriesConfig,
    /// Overnight reverse repo (RRPONTSYD, billions of dollars).
    ///
    /// Scaled by 1e9 — one order of magnitude above the other two. This
    /// mirrors the upstream policy exactly and is deliberate, not a unit bug.
    pub reverse_repo: SeriesConfig,

    /// First calendar day of the output range.
    pub start_date: NaiveDate,

    /// Week-over-week lookback (~one trading week).
    pub wow_offset: usize,
    /// Month-over-month lookback (~one trading month).
    pub mom_offset: usize,
    /// Year-over-year lookback (~one trading year).
    pub yoy_offset: usize,

    /// Trailing moving-average windows over the composite.
    pub ma_short: usize,
    pub ma_medium: usize,
    pub ma_long: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            balance_sheet: SeriesConfig {
                id: "WALCL".into(),
                scale: 1_000_000.0,
            },
            treasury_account: SeriesConfig {
                id: "WDTGAL".into(),
                scale: 1_000_000.0,
            },
            reverse_repo: SeriesConfig {
                id: "RRPONTSYD".into(),
                scale: 1_000_000_000.0,
            },
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            wow_offset: 5,
            mom_offset: 25,
            yoy_offset: 250,
            ma_short: 5,
            ma_medium: 20,
            ma_long: 60,
        }
    }
}

impl PipelineConfig {
    /// Load from a TOML file; absent fields keep their policy defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(String),
}

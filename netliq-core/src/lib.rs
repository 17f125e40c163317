//! NetLiq Core — FRED series fetch, business-day alignment, net-liquidity pipeline.
//!
//! This crate contains the whole batch transform:
//! - Series provider trait and the FRED CSV provider
//! - Business-day calendar and outer-join/forward-fill alignment
//! - Trailing SMA and lookback-ratio indicators
//! - The pipeline that scales, combines, and emits `LiquidityRecord`s
//!
//! Missing observations are `f64::NAN` everywhere in memory and become JSON
//! `null` only at the output boundary.

pub mod config;
pub mod data;
pub mod indicators;
pub mod pipeline;
pub mod report;

pub use config::PipelineConfig;
pub use pipeline::{run, run_to_file, transform};
pub use report::LiquidityRecord;

//! The net-liquidity batch pipeline.
//!
//! One linear pass: fetch the three series, outer-join and forward-fill them,
//! reindex onto the business-day calendar, scale onto a common dollar unit,
//! derive the composite and its rolling statistics, and drop the warm-up
//! prefix where the composite is still undefined.

use crate::config::PipelineConfig;
use crate::data::{
    business_days, forward_fill, merge_series, reindex, DataError, FetchProgress, RawSeries,
    SeriesProvider,
};
use crate::indicators::{lookback_ratio, trailing_sma};
use crate::report::{nullable, write_json, LiquidityRecord, ReportError};
use chrono::NaiveDate;
use std::path::Path;
use thiserror::Error;

/// The three fetched input series, in composite order.
#[derive(Debug, Clone)]
pub struct SeriesSet {
    pub balance_sheet: RawSeries,
    pub treasury_account: RawSeries,
    pub reverse_repo: RawSeries,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Fetch the three configured series sequentially, then transform.
///
/// The first fetch error aborts the run; there is no retry.
pub fn run(
    provider: &dyn SeriesProvider,
    config: &PipelineConfig,
    today: NaiveDate,
    progress: &dyn FetchProgress,
) -> Result<Vec<LiquidityRecord>, DataError> {
    let ids = [
        config.balance_sheet.id.as_str(),
        config.treasury_account.id.as_str(),
        config.reverse_repo.id.as_str(),
    ];

    let mut fetched: Vec<RawSeries> = Vec::with_capacity(ids.len());
    for (i, id) in ids.iter().enumerate() {
        progress.on_start(id, i, ids.len());
        match provider.fetch(id) {
            Ok(series) => {
                progress.on_complete(id, &Ok(series.points.len()));
                fetched.push(series);
            }
            Err(e) => {
                progress.on_complete(id, &Err(&e));
                return Err(e);
            }
        }
    }

    let mut iter = fetched.into_iter();
    let series = SeriesSet {
        balance_sheet: iter.next().expect("three series fetched"),
        treasury_account: iter.next().expect("three series fetched"),
        reverse_repo: iter.next().expect("three series fetched"),
    };

    Ok(transform(series, config, today))
}

/// Run the pipeline and write the JSON output.
///
/// The output file is only touched after every earlier step has succeeded,
/// so a failed run never creates or modifies it.
pub fn run_to_file(
    provider: &dyn SeriesProvider,
    config: &PipelineConfig,
    today: NaiveDate,
    progress: &dyn FetchProgress,
    output: impl AsRef<Path>,
) -> Result<Vec<LiquidityRecord>, PipelineError> {
    let records = run(provider, config, today, progress)?;
    write_json(output, &records)?;
    Ok(records)
}

/// The pure batch transform: three raw series in, derived records out.
///
/// Steps, in order: outer-join on date, forward-fill per series, reindex onto
/// the weekday calendar `[start_date, today]` (same fill rule), scale, derive
/// the composite and its lookback ratios and trailing means, then drop every
/// day where the composite itself is undefined (the warm-up prefix before all
/// three series have a first observation).
pub fn transform(
    series: SeriesSet,
    config: &PipelineConfig,
    today: NaiveDate,
) -> Vec<LiquidityRecord> {
    let bs_id = series.balance_sheet.id.clone();
    let tga_id = series.treasury_account.id.clone();
    let rrp_id = series.reverse_repo.id.clone();

    let inputs = [
        series.balance_sheet,
        series.treasury_account,
        series.reverse_repo,
    ];
    let mut merged = merge_series(&inputs);
    forward_fill(&mut merged);

    let calendar = business_days(config.start_date, today);
    let mut table = reindex(&merged, &calendar);

    let take_scaled = |table: &mut crate::data::MergedTable, id: &str, scale: f64| -> Vec<f64> {
        let mut column = table
            .columns
            .remove(id)
            .expect("merge_series produces a column per input series");
        for v in column.iter_mut() {
            *v *= scale;
        }
        column
    };

    let walcl = take_scaled(&mut table, &bs_id, config.balance_sheet.scale);
    let wdtgal = take_scaled(&mut table, &tga_id, config.treasury_account.scale);
    let rrpontsyd = take_scaled(&mut table, &rrp_id, config.reverse_repo.scale);

    // Composite per day; NaN if any input is still NaN that day. NaN
    // arithmetic gives exactly that for free.
    let net_liquidity: Vec<f64> = walcl
        .iter()
        .zip(&wdtgal)
        .zip(&rrpontsyd)
        .map(|((w, t), r)| w - t - r)
        .collect();

    let wow = lookback_ratio(&net_liquidity, config.wow_offset);
    let mom = lookback_ratio(&net_liquidity, config.mom_offset);
    let yoy = lookback_ratio(&net_liquidity, config.yoy_offset);

    let ma5 = trailing_sma(&net_liquidity, config.ma_short);
    let ma20 = trailing_sma(&net_liquidity, config.ma_medium);
    let ma60 = trailing_sma(&net_liquidity, config.ma_long);

    calendar
        .iter()
        .enumerate()
        .filter(|&(i, _)| !net_liquidity[i].is_nan())
        .map(|(i, &date)| LiquidityRecord {
            date,
            walcl: nullable(walcl[i]),
            wdtgal: nullable(wdtgal[i]),
            rrpontsyd: nullable(rrpontsyd[i]),
            net_liquidity: nullable(net_liquidity[i]),
            yoy: nullable(yoy[i]),
            mom: nullable(mom[i]),
            wow: nullable(wow[i]),
            ma5: nullable(ma5[i]),
            ma20: nullable(ma20[i]),
            ma60: nullable(ma60[i]),
        })
        .collect()
}

//! Multi-series date alignment.
//!
//! Three pure stages: outer-join the series on their date union, forward-fill
//! each column independently, then reindex onto the canonical business-day
//! calendar. Missing values are NaN at every stage; a leading gap (no prior
//! observation at all) stays NaN.

use super::provider::RawSeries;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

/// Series values on a common date axis.
///
/// Each column Vec has the same length as `dates`.
#[derive(Debug, Clone)]
pub struct MergedTable {
    /// The common date axis (sorted ascending).
    pub dates: Vec<NaiveDate>,
    /// Values per series id, aligned to `dates`.
    pub columns: HashMap<String, Vec<f64>>,
}

impl MergedTable {
    /// The column for a series id, if present.
    pub fn column(&self, id: &str) -> Option<&[f64]> {
        self.columns.get(id).map(|c| c.as_slice())
    }
}

/// Outer-join series on date: any date present in any series becomes a row,
/// sorted ascending. A series with no observation on a row gets NaN there.
///
/// Duplicate dates within one series resolve last-value-wins.
pub fn merge_series(series: &[RawSeries]) -> MergedTable {
    let mut all_dates = BTreeSet::new();
    for s in series {
        for &(date, _) in &s.points {
            all_dates.insert(date);
        }
    }
    let dates: Vec<NaiveDate> = all_dates.into_iter().collect();

    let mut columns: HashMap<String, Vec<f64>> = HashMap::new();
    for s in series {
        let mut by_date: HashMap<NaiveDate, f64> = HashMap::new();
        for &(date, value) in &s.points {
            by_date.insert(date, value);
        }

        let column: Vec<f64> = dates
            .iter()
            .map(|date| by_date.get(date).copied().unwrap_or(f64::NAN))
            .collect();

        columns.insert(s.id.clone(), column);
    }

    MergedTable { dates, columns }
}

/// Forward-fill every column in place: a NaN on row i takes the nearest
/// earlier non-NaN value in the same column. Leading NaNs stay NaN.
///
/// Idempotent — filling an already-filled table changes nothing.
pub fn forward_fill(table: &mut MergedTable) {
    for column in table.columns.values_mut() {
        fill_column(column);
    }
}

fn fill_column(column: &mut [f64]) {
    let mut last = f64::NAN;
    for value in column.iter_mut() {
        if value.is_nan() {
            *value = last;
        } else {
            last = *value;
        }
    }
}

/// Project a table onto a new date axis with the forward-fill rule: each
/// target date takes the value at the latest source date <= it, per column,
/// NaN if no source date precedes it.
pub fn reindex(table: &MergedTable, calendar: &[NaiveDate]) -> MergedTable {
    let mut columns: HashMap<String, Vec<f64>> = HashMap::new();

    for (id, column) in &table.columns {
        let mut out = Vec::with_capacity(calendar.len());
        // Index of the last source row at or before the current target date.
        let mut src = 0usize;
        let mut latest: Option<usize> = None;

        for &date in calendar {
            while src < table.dates.len() && table.dates[src] <= date {
                latest = Some(src);
                src += 1;
            }
            out.push(match latest {
                Some(i) => column[i],
                None => f64::NAN,
            });
        }

        columns.insert(id.clone(), out);
    }

    MergedTable {
        dates: calendar.to_vec(),
        columns,
    }
}

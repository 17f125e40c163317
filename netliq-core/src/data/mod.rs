//! Data retrieval and alignment.

pub mod align;
pub mod calendar;
pub mod fred;
pub mod provider;

pub use align::{forward_fill, merge_series, reindex, MergedTable};
pub use calendar::business_days;
pub use fred::FredProvider;
pub use provider::{
    DataError, FetchProgress, RawSeries, SeriesProvider, SilentProgress, StdoutProgress,
};

//! Net-worth trend series: period-over-period deltas, range filtering,
//! and bucketed display units.

mod trend_model;
mod trend_service;

pub use trend_model::{NetWorthSample, TrendPoint};
pub use trend_service::{delta_series, filter_range, to_buckets, to_display_buckets};

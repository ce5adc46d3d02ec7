//! Pure operations over the net-worth series.

use log::warn;
use rust_decimal::Decimal;

use crate::constants::DEFAULT_TREND_BUCKET;
use crate::period::Period;

use super::{NetWorthSample, TrendPoint};

/// Computes period-over-period deltas.
///
/// The input is ordered by period ascending before differencing; the
/// first point's delta is 0. Missing months are not interpolated, the
/// delta simply spans the gap.
pub fn delta_series(samples: &[NetWorthSample]) -> Vec<TrendPoint> {
    let mut ordered: Vec<&NetWorthSample> = samples.iter().collect();
    ordered.sort_by_key(|s| s.period);

    ordered
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let delta = if i == 0 {
                Decimal::ZERO
            } else {
                sample.net_worth - ordered[i - 1].net_worth
            };
            TrendPoint {
                period: sample.period,
                net_worth: sample.net_worth,
                delta,
            }
        })
        .collect()
}

/// Restricts the series to periods within the inclusive `[start, end]`
/// range. When `start > end` the result is empty; no swap, no error.
pub fn filter_range(samples: &[NetWorthSample], start: Period, end: Period) -> Vec<NetWorthSample> {
    samples
        .iter()
        .filter(|s| s.period >= start && s.period <= end)
        .cloned()
        .collect()
}

/// Rescales a trend to the default ten-thousand-unit display bucket.
pub fn to_display_buckets(points: &[TrendPoint]) -> Vec<TrendPoint> {
    to_buckets(points, Decimal::from(DEFAULT_TREND_BUCKET))
}

/// Rescales a trend to display buckets, truncating toward zero.
///
/// The bucketed delta is the raw delta divided by the bucket, NOT the
/// difference of the bucketed values; truncating first would drift by
/// one bucket on some months.
pub fn to_buckets(points: &[TrendPoint], bucket: Decimal) -> Vec<TrendPoint> {
    if bucket <= Decimal::ZERO {
        warn!("Ignoring non-positive trend bucket {}", bucket);
        return points.to_vec();
    }

    points
        .iter()
        .map(|p| TrendPoint {
            period: p.period,
            net_worth: (p.net_worth / bucket).trunc(),
            delta: (p.delta / bucket).trunc(),
        })
        .collect()
}

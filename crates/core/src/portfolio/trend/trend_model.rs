//! Trend domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::Period;

/// One monthly net-worth observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSample {
    pub period: Period,
    pub net_worth: Decimal,
}

/// A trend point with its movement versus the previous point.
///
/// Units are whatever the producing operation used: raw currency from
/// [`delta_series`](super::delta_series), bucketed units from
/// [`to_buckets`](super::to_buckets).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub period: Period,
    pub net_worth: Decimal,
    pub delta: Decimal,
}

//! Dashboard response models.
//!
//! These are the records the presentation layer consumes: plain numbers
//! only, so locale, currency symbols, and rounding stay a presentation
//! concern.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::Period;
use crate::portfolio::{OwnershipBreakdown, TrendPoint};
use crate::snapshot::TrendDirection;

/// Overview tab: summary cards, ownership breakdown, trend chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewMetrics {
    pub period: Period,
    pub total_assets: Decimal,
    pub total_debt: Decimal,
    pub net_worth: Decimal,
    /// Net worth movement versus the prior period; sign drives the
    /// up/down indicator.
    pub net_worth_delta: Decimal,
    pub direction: TrendDirection,
    pub ownership: OwnershipBreakdown,
    /// Monthly trend with raw-currency deltas, range-filtered when a
    /// range was requested.
    pub trend: Vec<TrendPoint>,
}

/// Monthly tab: cash-flow cards for one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowMetrics {
    pub period: Period,
    pub income: Decimal,
    pub expense: Decimal,
    pub savings: Decimal,
    /// `None` when income is zero; rendered as unavailable.
    pub savings_rate: Option<Decimal>,
}

/// Liquid holdings total for one owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerLiquidity {
    pub owner: String,
    pub liquid_total: Decimal,
}

/// Progress toward one goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub title: String,
    pub target_amount: Decimal,
    /// Fraction in [0, 1].
    pub progress: Decimal,
}

/// Insights tab: per-owner liquidity and goal progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightMetrics {
    pub liquidity: Vec<OwnerLiquidity>,
    pub goals: Vec<GoalProgress>,
}

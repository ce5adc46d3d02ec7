//! Dashboard repository and service trait definitions.

use async_trait::async_trait;

use crate::cash_flow::MonthlyCashFlowRecord;
use crate::errors::Result;
use crate::period::Period;
use crate::portfolio::{NetWorthSample, PortfolioLineItem};
use crate::snapshot::FinancialSnapshot;

use super::dashboard_model::{CashFlowMetrics, InsightMetrics, OverviewMetrics};

/// Source of raw dashboard facts for the current reporting period.
///
/// Implementations convert whatever the backing store is - literal
/// constants or a fetched workbook - into domain entities; the service
/// never sees raw cells.
#[async_trait]
pub trait DashboardRepositoryTrait: Send + Sync {
    async fn get_snapshot(&self) -> Result<FinancialSnapshot>;
    async fn get_portfolio(&self) -> Result<Vec<PortfolioLineItem>>;
    async fn get_net_worth_series(&self) -> Result<Vec<NetWorthSample>>;
    async fn get_cash_flow(&self) -> Result<Vec<MonthlyCashFlowRecord>>;
}

/// Trait for dashboard service operations
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Overview metrics; `range` restricts the trend series (inclusive).
    async fn get_overview(&self, range: Option<(Period, Period)>) -> Result<OverviewMetrics>;

    /// Cash-flow metrics for the requested month, or the latest one.
    async fn get_cash_flow(&self, period: Option<Period>) -> Result<CashFlowMetrics>;

    /// Per-owner liquidity and goal progress.
    async fn get_insights(&self) -> Result<InsightMetrics>;
}

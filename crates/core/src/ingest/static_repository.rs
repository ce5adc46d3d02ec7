//! In-memory repositories for the literal-constants data mode.

use async_trait::async_trait;

use crate::cash_flow::MonthlyCashFlowRecord;
use crate::dashboard::DashboardRepositoryTrait;
use crate::errors::Result;
use crate::goals::{Goal, GoalRepositoryTrait};
use crate::portfolio::{NetWorthSample, PortfolioLineItem};
use crate::snapshot::FinancialSnapshot;

/// Dashboard repository backed by constants supplied at construction.
///
/// This is the source's inline-data mode, and doubles as the natural
/// test fixture.
pub struct StaticDashboardRepository {
    snapshot: FinancialSnapshot,
    portfolio: Vec<PortfolioLineItem>,
    series: Vec<NetWorthSample>,
    cash_flow: Vec<MonthlyCashFlowRecord>,
}

impl StaticDashboardRepository {
    pub fn new(
        snapshot: FinancialSnapshot,
        portfolio: Vec<PortfolioLineItem>,
        series: Vec<NetWorthSample>,
        cash_flow: Vec<MonthlyCashFlowRecord>,
    ) -> Self {
        Self {
            snapshot,
            portfolio,
            series,
            cash_flow,
        }
    }
}

#[async_trait]
impl DashboardRepositoryTrait for StaticDashboardRepository {
    async fn get_snapshot(&self) -> Result<FinancialSnapshot> {
        Ok(self.snapshot.clone())
    }

    async fn get_portfolio(&self) -> Result<Vec<PortfolioLineItem>> {
        Ok(self.portfolio.clone())
    }

    async fn get_net_worth_series(&self) -> Result<Vec<NetWorthSample>> {
        Ok(self.series.clone())
    }

    async fn get_cash_flow(&self) -> Result<Vec<MonthlyCashFlowRecord>> {
        Ok(self.cash_flow.clone())
    }
}

/// Goal repository backed by constants; goals live in code in every
/// version of the source.
pub struct StaticGoalRepository {
    goals: Vec<Goal>,
}

impl StaticGoalRepository {
    pub fn new(goals: Vec<Goal>) -> Self {
        Self { goals }
    }
}

impl GoalRepositoryTrait for StaticGoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.goals.clone())
    }
}

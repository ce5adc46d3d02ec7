//! Dashboard service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::{Error, Result};
use crate::goals::GoalRepositoryTrait;
use crate::period::Period;
use crate::portfolio::{delta_series, filter_range, liquid_subtotal, ownership_breakdown};

use super::dashboard_model::{
    CashFlowMetrics, GoalProgress, InsightMetrics, OverviewMetrics, OwnerLiquidity,
};
use super::dashboard_traits::{DashboardRepositoryTrait, DashboardServiceTrait};

/// Computes the derived metrics behind each dashboard tab.
///
/// Pure and stateless across invocations: every call recomputes from the
/// repository's current data, so concurrent renders need no locking.
pub struct DashboardService {
    repository: Arc<dyn DashboardRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl DashboardService {
    pub fn new(
        repository: Arc<dyn DashboardRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            goal_repository,
        }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn get_overview(&self, range: Option<(Period, Period)>) -> Result<OverviewMetrics> {
        let snapshot = self.repository.get_snapshot().await?;
        let portfolio = self.repository.get_portfolio().await?;
        let series = self.repository.get_net_worth_series().await?;

        debug!(
            "Computing overview for {} over {} samples",
            snapshot.period,
            series.len()
        );

        let series = match range {
            Some((start, end)) => filter_range(&series, start, end),
            None => series,
        };

        Ok(OverviewMetrics {
            period: snapshot.period,
            total_assets: snapshot.total_assets,
            total_debt: snapshot.total_debt,
            net_worth: snapshot.net_worth,
            net_worth_delta: snapshot.net_worth_delta(),
            direction: snapshot.direction(),
            ownership: ownership_breakdown(&portfolio),
            trend: delta_series(&series),
        })
    }

    async fn get_cash_flow(&self, period: Option<Period>) -> Result<CashFlowMetrics> {
        let records = self.repository.get_cash_flow().await?;

        let record = match period {
            Some(p) => {
                // A requested month must exist.
                let found = records.into_iter().find(|r| r.period == p);
                Some(found.ok_or_else(|| {
                    Error::unavailable(format!("period {}", p), "no cash-flow record")
                })?)
            }
            None => records.into_iter().max_by_key(|r| r.period),
        };

        match record {
            Some(record) => Ok(CashFlowMetrics {
                period: record.period,
                income: record.total_income(),
                expense: record.total_expense(),
                savings: record.savings(),
                savings_rate: record.savings_rate(),
            }),
            // No records at all: fall back to the snapshot's monthly
            // figures (not every dataset version carries cash-flow rows).
            None => {
                debug!("No cash-flow records; falling back to snapshot figures");
                let snapshot = self.repository.get_snapshot().await?;
                Ok(CashFlowMetrics {
                    period: snapshot.period,
                    income: snapshot.monthly_income,
                    expense: snapshot.monthly_expense,
                    savings: snapshot.savings(),
                    savings_rate: snapshot.savings_rate(),
                })
            }
        }
    }

    async fn get_insights(&self) -> Result<InsightMetrics> {
        let snapshot = self.repository.get_snapshot().await?;
        let portfolio = self.repository.get_portfolio().await?;
        let goals = self.goal_repository.load_goals()?;

        // Owners in order of first appearance in the portfolio.
        let mut owners: Vec<&str> = Vec::new();
        for item in &portfolio {
            if !owners.contains(&item.owner.as_str()) {
                owners.push(&item.owner);
            }
        }

        let liquidity = owners
            .into_iter()
            .map(|owner| OwnerLiquidity {
                owner: owner.to_string(),
                liquid_total: liquid_subtotal(&portfolio, Some(owner)),
            })
            .collect();

        let goals = goals
            .iter()
            .map(|goal| GoalProgress {
                goal_id: goal.id.clone(),
                title: goal.title.clone(),
                target_amount: goal.target_amount,
                progress: goal.progress(snapshot.net_worth, snapshot.baseline_net_worth),
            })
            .collect();

        Ok(InsightMetrics { liquidity, goals })
    }
}

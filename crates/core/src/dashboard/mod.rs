//! Dashboard orchestration - one derived-metrics record per page tab.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;

pub use dashboard_model::{
    CashFlowMetrics, GoalProgress, InsightMetrics, OverviewMetrics, OwnerLiquidity,
};
pub use dashboard_service::DashboardService;
pub use dashboard_traits::{DashboardRepositoryTrait, DashboardServiceTrait};

#[cfg(test)]
mod dashboard_service_tests;

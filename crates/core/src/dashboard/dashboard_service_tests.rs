//! Unit tests for the dashboard service.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::cash_flow::MonthlyCashFlowRecord;
use crate::errors::{Error, Result};
use crate::goals::{Goal, GoalRepositoryTrait};
use crate::period::Period;
use crate::portfolio::{NetWorthSample, PortfolioLineItem};
use crate::snapshot::{FinancialSnapshot, TrendDirection};

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockDashboardRepository {
    snapshot: FinancialSnapshot,
    portfolio: Vec<PortfolioLineItem>,
    series: Vec<NetWorthSample>,
    cash_flow: Vec<MonthlyCashFlowRecord>,
}

#[async_trait]
impl DashboardRepositoryTrait for MockDashboardRepository {
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

struct MockGoalRepository {
    goals: Vec<Goal>,
}

impl GoalRepositoryTrait for MockGoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.goals.clone())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn period(label: &str) -> Period {
    label.parse().unwrap()
}

fn snapshot() -> FinancialSnapshot {
    FinancialSnapshot {
        period: period("26.02"),
        total_assets: dec!(403_641_070),
        total_debt: dec!(290_900_679),
        net_worth: dec!(112_740_391),
        prior_net_worth: dec!(108_187_566),
        baseline_net_worth: dec!(75_767_585),
        monthly_income: dec!(11_547_372),
        monthly_expense: dec!(6_125_348),
        monthly_savings: Some(dec!(5_422_024)),
    }
}

fn item(owner: &str, category: &str, amount: Decimal, is_liquid: bool) -> PortfolioLineItem {
    PortfolioLineItem {
        owner: owner.to_string(),
        category: category.to_string(),
        amount,
        is_liquid,
        color: None,
    }
}

fn sample(label: &str, net_worth: Decimal) -> NetWorthSample {
    NetWorthSample {
        period: period(label),
        net_worth,
    }
}

fn series() -> Vec<NetWorthSample> {
    vec![
        sample("25.08", dec!(75_767_585)),
        sample("25.09", dec!(84_854_400)),
        sample("25.10", dec!(91_706_414)),
        sample("25.11", dec!(90_894_166)),
        sample("25.12", dec!(96_985_717)),
        sample("26.01", dec!(108_187_566)),
        sample("26.02", dec!(112_740_391)),
    ]
}

fn service(cash_flow: Vec<MonthlyCashFlowRecord>) -> DashboardService {
    let repository = Arc::new(MockDashboardRepository {
        snapshot: snapshot(),
        portfolio: vec![
            item("A", "foreign stock", dec!(65_850_668), false),
            item("B", "foreign stock", dec!(34_809_457), true),
            item("B", "ISA", dec!(1_480_945), true),
        ],
        series: series(),
        cash_flow,
    });
    let goals = Arc::new(MockGoalRepository {
        goals: vec![Goal {
            id: "goal-1".to_string(),
            title: "First +100M".to_string(),
            target_amount: dec!(100_000_000),
            is_achieved: false,
        }],
    });
    DashboardService::new(repository, goals)
}

fn flow_record(label: &str) -> MonthlyCashFlowRecord {
    MonthlyCashFlowRecord {
        period: period(label),
        fixed_income: dec!(9_000_000),
        variable_income: dec!(2_547_372),
        fixed_expense: dec!(4_000_000),
        variable_expense: dec!(2_125_348),
        savings: None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn overview_combines_snapshot_breakdown_and_trend() {
    let overview = service(vec![]).get_overview(None).await.unwrap();

    assert_eq!(overview.net_worth_delta, dec!(4_552_825));
    assert_eq!(overview.direction, TrendDirection::Up);
    assert_eq!(overview.trend.len(), 7);
    assert_eq!(overview.trend[0].delta, Decimal::ZERO);
    assert_eq!(overview.ownership.owners.len(), 2);
    assert_eq!(overview.ownership.total.value, dec!(102_141_070));
    assert_eq!(overview.ownership.total.percentage, dec!(100));
}

#[tokio::test]
async fn overview_range_restricts_the_trend() {
    let range = Some((period("25.10"), period("25.12")));
    let overview = service(vec![]).get_overview(range).await.unwrap();

    assert_eq!(overview.trend.len(), 3);
    assert_eq!(overview.trend[0].period, period("25.10"));
    // Delta restarts at zero within the filtered window.
    assert_eq!(overview.trend[0].delta, Decimal::ZERO);
}

#[tokio::test]
async fn overview_inverted_range_yields_empty_trend() {
    let range = Some((period("25.12"), period("25.10")));
    let overview = service(vec![]).get_overview(range).await.unwrap();

    assert!(overview.trend.is_empty());
}

#[tokio::test]
async fn cash_flow_defaults_to_latest_record() {
    let metrics = service(vec![flow_record("26.01"), flow_record("26.02")])
        .get_cash_flow(None)
        .await
        .unwrap();

    assert_eq!(metrics.period, period("26.02"));
    assert_eq!(metrics.income, dec!(11_547_372));
    assert_eq!(metrics.savings, dec!(5_422_024));
}

#[tokio::test]
async fn cash_flow_for_missing_month_is_unavailable() {
    let err = service(vec![flow_record("26.02")])
        .get_cash_flow(Some(period("25.03")))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Unavailable { ref context, .. } if context.contains("25.03")));
}

#[tokio::test]
async fn cash_flow_falls_back_to_snapshot_when_no_records() {
    let metrics = service(vec![]).get_cash_flow(None).await.unwrap();

    assert_eq!(metrics.period, period("26.02"));
    assert_eq!(metrics.income, dec!(11_547_372));
    assert_eq!(metrics.savings, dec!(5_422_024));
    assert!(metrics.savings_rate.is_some());
}

#[tokio::test]
async fn insights_report_liquidity_per_owner_and_goal_progress() {
    let insights = service(vec![]).get_insights().await.unwrap();

    assert_eq!(insights.liquidity.len(), 2);
    let a = insights.liquidity.iter().find(|l| l.owner == "A").unwrap();
    let b = insights.liquidity.iter().find(|l| l.owner == "B").unwrap();
    assert_eq!(a.liquid_total, Decimal::ZERO);
    assert_eq!(b.liquid_total, dec!(36_290_402));

    assert_eq!(insights.goals.len(), 1);
    assert_eq!(insights.goals[0].progress, dec!(0.36972806));
}

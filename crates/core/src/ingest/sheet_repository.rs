//! Dashboard repository over a published spreadsheet.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use log::debug;

use tandem_sheets::tabs;
use tandem_sheets::{SheetProvider, TtlCache, Workbook};

use crate::cash_flow::MonthlyCashFlowRecord;
use crate::constants::SHEET_CACHE_TTL_SECS;
use crate::dashboard::DashboardRepositoryTrait;
use crate::errors::{Error, Result};
use crate::portfolio::{NetWorthSample, PortfolioLineItem};
use crate::snapshot::FinancialSnapshot;

use super::parsers;

const WORKBOOK_CACHE_KEY: &str = "workbook";

/// Which tabs carry the summary and portfolio data.
#[derive(Debug, Clone)]
pub struct SheetLayout {
    pub summary_tab: String,
    pub portfolio_tab: String,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            summary_tab: "summary".to_string(),
            portfolio_tab: "portfolio".to_string(),
        }
    }
}

/// Reads the workbook through a TTL cache and converts its tabs into
/// domain entities.
///
/// Month tabs are auto-detected by their `YY.MM` titles; the snapshot's
/// period is the latest detected month.
pub struct SheetDashboardRepository {
    provider: Arc<dyn SheetProvider>,
    cache: TtlCache<Workbook>,
    layout: SheetLayout,
}

impl SheetDashboardRepository {
    pub fn new(provider: Arc<dyn SheetProvider>, layout: SheetLayout) -> Self {
        Self::with_ttl(provider, layout, Duration::seconds(SHEET_CACHE_TTL_SECS))
    }

    pub fn with_ttl(provider: Arc<dyn SheetProvider>, layout: SheetLayout, ttl: Duration) -> Self {
        Self {
            provider,
            cache: TtlCache::new(ttl),
            layout,
        }
    }

    async fn workbook(&self) -> Result<Workbook> {
        let workbook = self
            .cache
            .get_or_fetch(WORKBOOK_CACHE_KEY, || self.provider.fetch_workbook())
            .await?;
        Ok(workbook)
    }

    /// Parses all month tabs, sorted by period ascending.
    fn month_data(
        workbook: &Workbook,
    ) -> Result<Vec<(NetWorthSample, Option<MonthlyCashFlowRecord>)>> {
        let mut parsed: Vec<(NetWorthSample, Option<MonthlyCashFlowRecord>)> = workbook
            .sheets
            .iter()
            .filter(|sheet| tabs::is_month_tab(&sheet.title))
            .map(parsers::parse_month_tab)
            .collect::<Result<_>>()?;

        parsed.sort_by_key(|(sample, _)| sample.period);
        debug!("Detected {} month tabs", parsed.len());
        Ok(parsed)
    }
}

#[async_trait]
impl DashboardRepositoryTrait for SheetDashboardRepository {
    async fn get_snapshot(&self) -> Result<FinancialSnapshot> {
        let workbook = self.workbook().await?;

        let period = Self::month_data(&workbook)?
            .last()
            .map(|(sample, _)| sample.period)
            .ok_or_else(|| Error::unavailable("workbook", "no month tabs detected"))?;

        let table = workbook.sheet(&self.layout.summary_tab).ok_or_else(|| {
            Error::unavailable(self.layout.summary_tab.as_str(), "tab not published")
        })?;

        parsers::parse_snapshot(table, period)
    }

    async fn get_portfolio(&self) -> Result<Vec<PortfolioLineItem>> {
        let workbook = self.workbook().await?;

        let table = workbook.sheet(&self.layout.portfolio_tab).ok_or_else(|| {
            Error::unavailable(self.layout.portfolio_tab.as_str(), "tab not published")
        })?;

        parsers::parse_portfolio(table)
    }

    async fn get_net_worth_series(&self) -> Result<Vec<NetWorthSample>> {
        let workbook = self.workbook().await?;

        Ok(Self::month_data(&workbook)?
            .into_iter()
            .map(|(sample, _)| sample)
            .collect())
    }

    async fn get_cash_flow(&self) -> Result<Vec<MonthlyCashFlowRecord>> {
        let workbook = self.workbook().await?;

        Ok(Self::month_data(&workbook)?
            .into_iter()
            .filter_map(|(_, record)| record)
            .collect())
    }
}

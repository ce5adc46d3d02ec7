//! Snapshot domain model and its derived metrics.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::period::Period;

/// Direction of the net-worth movement versus the prior period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    pub fn from_delta(delta: Decimal) -> Self {
        if delta > Decimal::ZERO {
            TrendDirection::Up
        } else if delta < Decimal::ZERO {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        }
    }
}

/// Summary facts for one reporting period.
///
/// All fields are independently supplied by the source; in particular
/// `net_worth` is NOT re-derived from `total_assets - total_debt`, which
/// need not reconcile in the source data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSnapshot {
    pub period: Period,
    pub total_assets: Decimal,
    pub total_debt: Decimal,
    pub net_worth: Decimal,
    pub prior_net_worth: Decimal,
    /// Net worth at the goal-tracking baseline snapshot.
    pub baseline_net_worth: Decimal,
    pub monthly_income: Decimal,
    pub monthly_expense: Decimal,
    /// Separately supplied savings figure; when present it is the
    /// canonical value, otherwise savings is `income - expense`.
    pub monthly_savings: Option<Decimal>,
}

impl FinancialSnapshot {
    /// Net-worth movement versus the prior period. May be negative.
    pub fn net_worth_delta(&self) -> Decimal {
        self.net_worth - self.prior_net_worth
    }

    pub fn direction(&self) -> TrendDirection {
        TrendDirection::from_delta(self.net_worth_delta())
    }

    /// Canonical monthly savings: the supplied figure when present,
    /// `income - expense` otherwise.
    pub fn savings(&self) -> Decimal {
        self.monthly_savings
            .unwrap_or(self.monthly_income - self.monthly_expense)
    }

    /// Savings rate as a percentage of income, unrounded.
    ///
    /// Returns `None` when income is zero; the rate is undefined on that
    /// boundary and consumers render it as unavailable.
    pub fn savings_rate(&self) -> Option<Decimal> {
        if self.monthly_income.is_zero() {
            return None;
        }
        Some(self.savings() / self.monthly_income * dec!(100))
    }
}

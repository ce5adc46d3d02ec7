//! Cash-flow domain model.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::period::Period;

/// Income and expense subtotals for one month.
///
/// Not every dataset version carries these records; the dashboard falls
/// back to the snapshot's monthly figures when they are absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCashFlowRecord {
    pub period: Period,
    pub fixed_income: Decimal,
    pub variable_income: Decimal,
    pub fixed_expense: Decimal,
    pub variable_expense: Decimal,
    /// Separately supplied savings figure; canonical when present.
    pub savings: Option<Decimal>,
}

impl MonthlyCashFlowRecord {
    pub fn total_income(&self) -> Decimal {
        self.fixed_income + self.variable_income
    }

    pub fn total_expense(&self) -> Decimal {
        self.fixed_expense + self.variable_expense
    }

    /// Canonical savings: supplied figure when present, income - expense
    /// otherwise.
    pub fn savings(&self) -> Decimal {
        self.savings
            .unwrap_or(self.total_income() - self.total_expense())
    }

    /// Savings rate as a percentage of income; `None` when income is
    /// zero.
    pub fn savings_rate(&self) -> Option<Decimal> {
        let income = self.total_income();
        if income.is_zero() {
            return None;
        }
        Some(self.savings() / income * dec!(100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MonthlyCashFlowRecord {
        MonthlyCashFlowRecord {
            period: "26.02".parse().unwrap(),
            fixed_income: dec!(9_000_000),
            variable_income: dec!(2_547_372),
            fixed_expense: dec!(4_000_000),
            variable_expense: dec!(2_125_348),
            savings: None,
        }
    }

    #[test]
    fn subtotals_and_computed_savings() {
        let r = record();
        assert_eq!(r.total_income(), dec!(11_547_372));
        assert_eq!(r.total_expense(), dec!(6_125_348));
        assert_eq!(r.savings(), dec!(5_422_024));
    }

    #[test]
    fn supplied_savings_overrides_computed() {
        let mut r = record();
        r.savings = Some(dec!(5_000_000));
        assert_eq!(r.savings(), dec!(5_000_000));
    }

    #[test]
    fn zero_income_has_no_rate() {
        let mut r = record();
        r.fixed_income = Decimal::ZERO;
        r.variable_income = Decimal::ZERO;
        assert_eq!(r.savings_rate(), None);
    }
}

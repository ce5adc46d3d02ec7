//! Goals domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A net-worth growth goal: reach `target_amount` of increase over the
/// snapshot baseline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub target_amount: Decimal,
    pub is_achieved: bool,
}

impl Goal {
    /// Fraction of the target increase achieved, clamped to [0, 1].
    ///
    /// Negative growth clamps to 0 and overshoot clamps to 1, so the
    /// value is always a displayable progress fraction. A non-positive
    /// target yields 0.
    pub fn progress(&self, net_worth: Decimal, baseline: Decimal) -> Decimal {
        if self.target_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        ((net_worth - baseline) / self.target_amount).clamp(Decimal::ZERO, Decimal::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn goal(target: Decimal) -> Goal {
        Goal {
            id: "goal-1".to_string(),
            title: "First +100M".to_string(),
            target_amount: target,
            is_achieved: false,
        }
    }

    #[test]
    fn progress_matches_worked_example() {
        let g = goal(dec!(100_000_000));
        let p = g.progress(dec!(112_740_391), dec!(75_767_585));
        assert_eq!(p, dec!(0.36972806));
    }

    #[test]
    fn progress_clamps_both_ends() {
        let g = goal(dec!(100));
        assert_eq!(g.progress(dec!(0), dec!(50)), Decimal::ZERO);
        assert_eq!(g.progress(dec!(1000), dec!(50)), Decimal::ONE);
    }

    #[test]
    fn non_positive_target_yields_zero() {
        assert_eq!(goal(Decimal::ZERO).progress(dec!(10), dec!(0)), Decimal::ZERO);
        assert_eq!(goal(dec!(-5)).progress(dec!(10), dec!(0)), Decimal::ZERO);
    }
}

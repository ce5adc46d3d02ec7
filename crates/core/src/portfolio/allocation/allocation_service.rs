//! Pure aggregation over portfolio line items.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{OWNERSHIP_TOTAL_ID, PERCENT_PRECISION};

use super::{OwnerAllocation, OwnershipBreakdown, PortfolioLineItem};

/// Groups line items by owner and computes each owner's share of the
/// grand total.
///
/// Shares are `owner_sum / total * 100` rounded for display stability;
/// the appended total row carries the literal 100 instead. Repeated
/// owner+category lines are simply summed.
pub fn ownership_breakdown(items: &[PortfolioLineItem]) -> OwnershipBreakdown {
    if items.is_empty() {
        return OwnershipBreakdown::empty();
    }

    let mut by_owner: BTreeMap<&str, Decimal> = BTreeMap::new();
    for item in items {
        *by_owner.entry(item.owner.as_str()).or_insert(Decimal::ZERO) += item.amount;
    }

    let total_value: Decimal = by_owner.values().copied().sum();

    let mut owners: Vec<OwnerAllocation> = by_owner
        .into_iter()
        .map(|(owner, value)| {
            let percentage = if total_value.is_zero() {
                Decimal::ZERO
            } else {
                (value / total_value * dec!(100)).round_dp(PERCENT_PRECISION)
            };
            OwnerAllocation {
                owner: owner.to_string(),
                value,
                percentage,
            }
        })
        .collect();

    // Sort by value descending for display
    owners.sort_by(|a, b| b.value.cmp(&a.value));

    OwnershipBreakdown {
        owners,
        total: OwnerAllocation {
            owner: OWNERSHIP_TOTAL_ID.to_string(),
            value: total_value,
            percentage: dec!(100),
        },
    }
}

/// Sum of liquid line items, optionally restricted to one owner.
pub fn liquid_subtotal(items: &[PortfolioLineItem], owner: Option<&str>) -> Decimal {
    items
        .iter()
        .filter(|item| item.is_liquid)
        .filter(|item| owner.map_or(true, |o| item.owner == o))
        .map(|item| item.amount)
        .sum()
}

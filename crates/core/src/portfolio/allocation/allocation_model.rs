//! Allocation models for the portfolio breakdown by owner.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::OWNERSHIP_TOTAL_ID;

/// One holding line of the portfolio.
///
/// Liquidity is an explicit flag assigned at ingestion time; nothing
/// downstream classifies holdings by matching category labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioLineItem {
    /// Owner identifier, one of a small fixed set.
    pub owner: String,
    /// Free-text asset type label (e.g. "foreign stock", "ISA").
    pub category: String,
    pub amount: Decimal,
    /// Whether the holding converts to spendable cash without delay.
    pub is_liquid: bool,
    /// Chart color carried as data; presentation decides how to use it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One owner's aggregated slice of the portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerAllocation {
    pub owner: String,
    pub value: Decimal,
    /// Share of the grand total, 0-100, rounded for display stability.
    pub percentage: Decimal,
}

/// Per-owner breakdown plus a synthetic total row.
///
/// The total row's share is the literal 100, never recomputed from the
/// slices, so floating-point display drift cannot make it read 99.99.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipBreakdown {
    /// Per-owner slices, sorted by value descending.
    pub owners: Vec<OwnerAllocation>,
    pub total: OwnerAllocation,
}

impl OwnershipBreakdown {
    /// An empty breakdown with a zero-valued total row.
    pub fn empty() -> Self {
        Self {
            owners: Vec::new(),
            total: OwnerAllocation {
                owner: OWNERSHIP_TOTAL_ID.to_string(),
                value: Decimal::ZERO,
                percentage: dec!(100),
            },
        }
    }
}

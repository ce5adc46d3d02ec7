//! Ownership allocation over portfolio line items.

mod allocation_model;
mod allocation_service;

pub use allocation_model::{OwnerAllocation, OwnershipBreakdown, PortfolioLineItem};
pub use allocation_service::{liquid_subtotal, ownership_breakdown};

//! Financial snapshot module - the per-period summary facts.

mod snapshot_model;

pub use snapshot_model::{FinancialSnapshot, TrendDirection};

//! Portfolio module - line items, ownership allocation, and the
//! net-worth trend series.

pub mod allocation;
pub mod trend;

pub use allocation::*;
pub use trend::*;

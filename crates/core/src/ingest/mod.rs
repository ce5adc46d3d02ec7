//! Ingestion boundary - converts raw tabular data into domain entities.
//!
//! All data-shape problems (missing cells, unparseable amounts, bad
//! period labels) are caught here and surfaced as
//! [`Error::Unavailable`](crate::Error::Unavailable) naming the
//! offending tab, never propagated into metric computation.

mod parsers;
mod sheet_repository;
mod static_repository;

pub use parsers::{parse_month_tab, parse_portfolio, parse_snapshot};
pub use sheet_repository::{SheetDashboardRepository, SheetLayout};
pub use static_repository::{StaticDashboardRepository, StaticGoalRepository};

//! Tandem Core - Domain entities, services, and traits.
//!
//! This crate contains the derived-metrics logic of the household finance
//! dashboard. It is presentation-agnostic: every operation accepts and
//! returns plain numeric/record types, and all formatting (currency
//! strings, glyphs, colors-as-css) is left to consumers. Raw data comes
//! in through the repository traits, implemented either over in-memory
//! constants or over the `tandem-sheets` remote source.

pub mod cash_flow;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod goals;
pub mod ingest;
pub mod period;
pub mod portfolio;
pub mod snapshot;

// Re-export common types from the snapshot and portfolio modules
pub use portfolio::*;
pub use snapshot::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
pub use period::Period;

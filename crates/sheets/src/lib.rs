//! Tandem Sheets - remote spreadsheet data source.
//!
//! This crate fetches a published spreadsheet document over HTTP and hands
//! its tabs to callers as plain tabular data. It knows nothing about the
//! domain entities built from that data; the conversion lives in
//! `tandem-core`'s ingestion boundary.

pub mod cache;
pub mod errors;
pub mod models;
pub mod provider;
pub mod tabs;

pub use cache::{Clock, SystemClock, TtlCache};
pub use errors::SheetDataError;
pub use models::{SheetTable, Workbook};
pub use provider::{PublishedCsvProvider, PublishedSheetConfig, SheetProvider};

//! Spreadsheet provider trait and implementations.

mod published_csv;
mod traits;

pub use published_csv::{PublishedCsvProvider, PublishedSheetConfig};
pub use traits::SheetProvider;

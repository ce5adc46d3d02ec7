//! Spreadsheet provider trait definition.

use async_trait::async_trait;

use crate::errors::SheetDataError;
use crate::models::{SheetTable, Workbook};

/// A source of published spreadsheet tabs.
///
/// Implement this trait to support a new export format. The default
/// `fetch_workbook` lists the tabs and fetches each one; providers that
/// can download the whole document at once may override it.
#[async_trait]
pub trait SheetProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Lists the published tab titles, in page order.
    async fn list_tabs(&self) -> Result<Vec<String>, SheetDataError>;

    /// Fetches a single tab as raw tabular data.
    async fn fetch_sheet(&self, tab: &str) -> Result<SheetTable, SheetDataError>;

    /// Fetches every published tab.
    async fn fetch_workbook(&self) -> Result<Workbook, SheetDataError> {
        let mut sheets = Vec::new();
        for tab in self.list_tabs().await? {
            sheets.push(self.fetch_sheet(&tab).await?);
        }
        Ok(Workbook { sheets })
    }
}

//! Published-document CSV provider.
//!
//! Works against a spreadsheet published to the web:
//!
//! - Tab list: `{base_url}/{document_id}/pubhtml`, scraped from the tab
//!   strip markup.
//! - Tab data: `{base_url}/{document_id}/gviz/tq?tqx=out:csv&sheet={tab}`,
//!   decoded with the `csv` crate.
//!
//! Every cell is kept as a raw string; no numeric interpretation happens
//! here.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::errors::SheetDataError;
use crate::models::SheetTable;
use crate::provider::SheetProvider;
use crate::tabs;

const DEFAULT_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";
const PROVIDER_ID: &str = "PUBLISHED_CSV";

/// Default HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a published spreadsheet document.
#[derive(Debug, Clone)]
pub struct PublishedSheetConfig {
    /// Document identifier from the published URL.
    pub document_id: String,
    /// Host prefix; override for tests against a local server.
    pub base_url: String,
}

impl PublishedSheetConfig {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Fetches published spreadsheet tabs as CSV.
pub struct PublishedCsvProvider {
    client: Client,
    config: PublishedSheetConfig,
}

impl PublishedCsvProvider {
    pub fn new(config: PublishedSheetConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self { client, config }
    }

    fn pubhtml_url(&self) -> String {
        format!("{}/{}/pubhtml", self.config.base_url, self.config.document_id)
    }

    fn csv_url(&self, tab: &str) -> String {
        format!(
            "{}/{}/gviz/tq?tqx=out:csv&sheet={}",
            self.config.base_url,
            self.config.document_id,
            urlencoding::encode(tab)
        )
    }

    async fn fetch_text(&self, url: &str) -> Result<String, SheetDataError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetDataError::Http {
                status: status.as_u16(),
                resource: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    fn parse_csv(tab: &str, body: &str) -> Result<SheetTable, SheetDataError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(body.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        Ok(SheetTable::new(tab, rows))
    }
}

#[async_trait]
impl SheetProvider for PublishedCsvProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn list_tabs(&self) -> Result<Vec<String>, SheetDataError> {
        let html = self.fetch_text(&self.pubhtml_url()).await?;
        let names = tabs::extract_tab_names(&html);

        if names.is_empty() {
            return Err(SheetDataError::Malformed(
                "no tabs found in published document".to_string(),
            ));
        }

        debug!("{}: document lists {} tabs", PROVIDER_ID, names.len());
        Ok(names)
    }

    async fn fetch_sheet(&self, tab: &str) -> Result<SheetTable, SheetDataError> {
        let body = self.fetch_text(&self.csv_url(tab)).await?;

        // The gviz endpoint answers 200 with an HTML error page for
        // unknown tab names.
        if body.trim_start().starts_with('<') {
            return Err(SheetDataError::TabNotFound(tab.to_string()));
        }

        Self::parse_csv(tab, &body)
    }
}

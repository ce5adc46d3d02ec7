//! Error types for spreadsheet fetching and parsing.

use thiserror::Error;

/// Errors that can occur while fetching or decoding a published spreadsheet.
#[derive(Error, Debug)]
pub enum SheetDataError {
    /// The document or tab export returned a non-success HTTP status.
    #[error("HTTP {status} while fetching {resource}")]
    Http { status: u16, resource: String },

    /// The request to the document host timed out.
    #[error("Timeout while fetching {0}")]
    Timeout(String),

    /// The requested tab does not exist in the published document.
    #[error("Tab not found: {0}")]
    TabNotFound(String),

    /// The response body could not be decoded as the expected format.
    #[error("Malformed sheet data: {0}")]
    Malformed(String),

    /// The HTTP request failed before a response was received.
    #[error("Request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for SheetDataError {
    fn from(err: reqwest::Error) -> Self {
        let resource = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "<unknown>".to_string());

        if err.is_timeout() {
            return SheetDataError::Timeout(resource);
        }

        if let Some(status) = err.status() {
            return SheetDataError::Http {
                status: status.as_u16(),
                resource,
            };
        }

        SheetDataError::Request(err.to_string())
    }
}

impl From<csv::Error> for SheetDataError {
    fn from(err: csv::Error) -> Self {
        SheetDataError::Malformed(err.to_string())
    }
}

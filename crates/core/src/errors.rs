//! Core error types for the dashboard.
//!
//! Every failure here is a local data-shape problem: a missing field, an
//! unparseable cell, a tab that is not published. None of them are
//! transient, nothing is retried, and consumers are expected to render
//! them as "data unavailable", never crash a page.

use thiserror::Error;

use tandem_sheets::SheetDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Sheet data operation failed: {0}")]
    SheetData(#[from] SheetDataError),

    /// Raised at the ingestion boundary when a tab or period cannot be
    /// converted into domain entities.
    #[error("Data unavailable for {context}: {reason}")]
    Unavailable { context: String, reason: String },

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

impl Error {
    /// Builds an [`Error::Unavailable`] naming the tab or period the
    /// problem was found in.
    pub fn unavailable(context: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Error::Unavailable {
            context: context.into(),
            reason: reason.to_string(),
        }
    }
}

/// Validation errors for raw cell values.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Invalid period label '{0}'")]
    InvalidPeriod(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can escape the fetch-and-extract pipeline
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A page could not be retrieved at all. Aborts the run.
    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid locator '{selector}': {reason}")]
    Selector { selector: String, reason: String },
}

/// Why a single listing was dropped
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("year is not a number: '{raw}'")]
    InvalidYear { raw: String },
}

use crate::models::ScrapeReport;
use crate::scrapers::error::ScrapeError;
use anyhow::Result;
use async_trait::async_trait;

/// Retrieves the raw markup of one page
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Issue a single GET for `url`. Only transport-level failures are
    /// errors; a non-2xx response still yields its body.
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Common trait for all listing scrapers
#[async_trait]
pub trait ListingScraper: Send + Sync {
    /// Scrape the configured listing index
    async fn scrape(&self) -> Result<ScrapeReport>;

    /// Get the name of the scraper source
    fn source_name(&self) -> &'static str;
}

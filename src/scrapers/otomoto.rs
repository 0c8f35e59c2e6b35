use crate::models::{ListingRecord, ScrapeReport, Source};
use crate::scrapers::error::ScrapeError;
use crate::scrapers::extract::Locator;
use crate::scrapers::fetcher::HttpFetcher;
use crate::scrapers::record::RecordBuilder;
use crate::scrapers::traits::{ListingScraper, PageFetcher};
use crate::scrapers::types::{page_url, ScrapeConfig};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use scraper::Html;
use std::fmt;
use tracing::{debug, error, info, warn};

/// Container marker for promoted listings on a results page
const LISTING_LOCATOR: &str = r#"article[data-highlighted="true"]"#;

/// Why a run stopped requesting pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every requested page was fetched
    PageLimit,
    /// `page` had no listings; earlier pages did
    EndOfResults { page: u32 },
    /// The very first page had no listings, usually a layout change
    NoListingsOnFirstPage,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::PageLimit => f.write_str("page limit reached"),
            StopReason::EndOfResults { page } => write!(f, "no results on page {}", page),
            StopReason::NoListingsOnFirstPage => f.write_str("no listings on first page"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub pages_fetched: u32,
    pub stop: StopReason,
}

/// Records extracted from one page, plus how many containers it had
struct PageResult {
    listings_found: usize,
    records: Vec<ListingRecord>,
}

/// Paginated otomoto.pl scraper
pub struct OtomotoScraper<F = HttpFetcher> {
    fetcher: F,
    builder: RecordBuilder,
    listing: Locator,
    config: ScrapeConfig,
}

impl OtomotoScraper<HttpFetcher> {
    /// Create a scraper with a custom configuration
    pub fn with_params(config: ScrapeConfig) -> Result<Self, ScrapeError> {
        let fetcher = HttpFetcher::with_params(&config)?;
        Self::with_fetcher(fetcher, config)
    }
}

impl<F: PageFetcher> OtomotoScraper<F> {
    pub fn with_fetcher(fetcher: F, config: ScrapeConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            fetcher,
            builder: RecordBuilder::with_params(&config)?,
            listing: Locator::new(LISTING_LOCATOR)?,
            config,
        })
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Scrape pages `1..=page_count` of `base_url` into a fresh vector.
    pub async fn scrape_all(
        &self,
        base_url: &str,
        page_count: u32,
    ) -> Result<Vec<ListingRecord>, ScrapeError> {
        let mut records = Vec::new();
        let summary = self.scrape_into(base_url, page_count, &mut records).await?;

        info!(
            pages = summary.pages_fetched,
            stop = %summary.stop,
            "Successfully scraped {} listings",
            records.len()
        );
        Ok(records)
    }

    /// Scrape pages in order, appending every valid listing to `records`.
    ///
    /// Stops early at the first page without listings. A transport failure
    /// aborts the run; records from earlier pages stay in `records`.
    pub async fn scrape_into(
        &self,
        base_url: &str,
        page_count: u32,
        records: &mut Vec<ListingRecord>,
    ) -> Result<ScrapeSummary, ScrapeError> {
        let mut pages_fetched = 0;

        for page in 1..=page_count {
            info!(page, "Scraping page {}...", page);
            let url = page_url(base_url, page);

            let html = self.fetcher.fetch(&url).await.map_err(|e| {
                error!(page, error = %e, "Error while fetching the page");
                e
            })?;
            pages_fetched += 1;

            let result = self.extract_page(&html);

            if result.listings_found == 0 {
                let stop = if page == 1 {
                    warn!(
                        url = %url,
                        "No listings on the first page; the page layout may have changed"
                    );
                    StopReason::NoListingsOnFirstPage
                } else {
                    info!(page, "No listings found, reached the end of results");
                    StopReason::EndOfResults { page }
                };
                return Ok(ScrapeSummary { pages_fetched, stop });
            }

            info!(
                page,
                "Extracted {} of {} listings",
                result.records.len(),
                result.listings_found
            );
            records.extend(result.records);
        }

        Ok(ScrapeSummary {
            pages_fetched,
            stop: StopReason::PageLimit,
        })
    }

    fn extract_page(&self, html: &str) -> PageResult {
        let document = Html::parse_document(html);
        let nodes: Vec<_> = document.select(self.listing.selector()).collect();
        debug!("Found {} listing nodes in HTML", nodes.len());

        PageResult {
            listings_found: nodes.len(),
            records: nodes
                .into_iter()
                .filter_map(|node| self.builder.build(node))
                .collect(),
        }
    }
}

#[async_trait]
impl<F: PageFetcher> ListingScraper for OtomotoScraper<F> {
    async fn scrape(&self) -> Result<ScrapeReport> {
        info!("Starting otomoto scrape of {}", self.config.base_url);

        let records = self
            .scrape_all(&self.config.base_url, self.config.page_count)
            .await?;

        Ok(ScrapeReport {
            source: Source::Otomoto,
            base_url: self.config.base_url.clone(),
            scraped_at: Utc::now(),
            records,
        })
    }

    fn source_name(&self) -> &'static str {
        "otomoto"
    }
}

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.otomoto.pl/osobowe/volkswagen";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Separator between engine, power and description in the short listing line.
/// Verify against live markup; older captures show it mis-decoded as "â€¢".
pub const DEFAULT_DESCRIPTION_DELIMITER: &str = "•";

/// Query fragment the site appends to thumbnail URLs
pub const DEFAULT_THUMBNAIL_SUFFIX: &str = ";s=320x240";

pub const NO_IMAGE: &str = "no image";

/// Parameters for a listing scrape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Listing index URL, without the page parameter
    pub base_url: String,
    /// Number of pages to request, starting at 1
    pub page_count: u32,
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    pub description_delimiter: String,
    pub thumbnail_suffix: String,
    /// Substituted for `image_url` when a listing has no image
    pub no_image: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_count: 4,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            description_delimiter: DEFAULT_DESCRIPTION_DELIMITER.to_string(),
            thumbnail_suffix: DEFAULT_THUMBNAIL_SUFFIX.to_string(),
            no_image: NO_IMAGE.to_string(),
        }
    }
}

/// Builds the URL of one result page.
pub fn page_url(base_url: &str, page: u32) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{}{}page={}", base_url, separator, page)
}

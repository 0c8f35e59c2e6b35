use crate::scrapers::error::ScrapeError;
use crate::scrapers::traits::PageFetcher;
use crate::scrapers::types::ScrapeConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

/// `PageFetcher` backed by a reqwest client with a browser user agent
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn with_params(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(ScrapeError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        debug!("Fetching URL: {}", url);

        let transport = |source: reqwest::Error| ScrapeError::Transport {
            url: url.to_string(),
            source: Box::new(source),
        };

        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, url, "Non-success status, parsing body anyway");
        }

        let html = response.text().await.map_err(transport)?;
        debug!("Downloaded {} bytes of HTML", html.len());

        Ok(html)
    }
}

use std::time::Duration;
use tamilmv_extractor_prelude::{Movie, ScrapeError, Scraper, ScraperBuilder};
use url::Url;

mod date;
pub mod page;

pub const NAME: &str = "tamilmv";
const DEFAULT_TIMEOUT: u64 = 30;
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

async fn fetch_page(client: &reqwest::Client, url: Url) -> Result<String, ScrapeError> {
    let url_str = url.to_string();
    let res = client
        .get(url)
        .send()
        .await
        .and_then(|res| res.error_for_status())
        .map_err(|cause| ScrapeError::UnableToQuery {
            url: url_str.clone(),
            cause: cause.to_string(),
        })?;
    res.text().await.map_err(|cause| ScrapeError::UnableToRead {
        url: url_str,
        cause: cause.to_string(),
    })
}

#[derive(Debug, serde::Deserialize)]
pub struct TamilMvConfig {
    /// Request timeout, in seconds.
    #[serde(default = "TamilMvConfig::default_timeout")]
    pub timeout: u64,
    #[serde(default = "TamilMvConfig::default_user_agent")]
    pub user_agent: String,
}

impl Default for TamilMvConfig {
    fn default() -> Self {
        Self {
            timeout: Self::default_timeout(),
            user_agent: Self::default_user_agent(),
        }
    }
}

impl TamilMvConfig {
    fn default_timeout() -> u64 {
        DEFAULT_TIMEOUT
    }

    fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.into()
    }

    fn client(&self) -> Result<reqwest::Client, ScrapeError> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout))
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|cause| ScrapeError::UnableToBuildClient {
                cause: cause.to_string(),
            })
    }
}

impl ScraperBuilder for TamilMvConfig {
    fn build(self) -> Result<Box<dyn Scraper + Send + Sync + 'static>, ScrapeError> {
        tracing::info!(
            "building {NAME} scraper with timeout={}s user_agent={:?}",
            self.timeout,
            self.user_agent
        );
        let client = self.client()?;
        Ok(Box::new(TamilMvScraper::new(client)))
    }
}

#[derive(Debug)]
pub struct TamilMvScraper {
    client: reqwest::Client,
}

impl Default for TamilMvScraper {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl TamilMvScraper {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Scraper for TamilMvScraper {
    async fn scrape(&self, url: &str) -> Result<Movie, ScrapeError> {
        tracing::debug!("{NAME} scraping {url:?}");
        let target = Url::parse(url).map_err(|cause| ScrapeError::UnableToBuildUrl {
            url: url.to_string(),
            cause,
        })?;
        let html = fetch_page(&self.client, target).await?;
        let movie = page::parse(html.as_str())?;
        tracing::debug!(
            "{NAME} found {} torrents and {} screenshots for {:?}",
            movie.torrents.len(),
            movie.screenshots.len(),
            movie.name
        );
        Ok(movie)
    }
}

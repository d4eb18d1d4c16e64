//! Outbound page fetching.
//!
//! One blocking client, built once, carrying a fixed browser-like header set
//! on every request. Extraction code never talks to the network directly; it
//! goes through [`PageFetcher`] so tests can substitute canned documents.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, REFERER};

use crate::{Config, MercatoError, Result};

/// Collaborator that turns a URL into raw document text.
pub trait PageFetcher {
    /// Fetch the document at `url`, failing on network errors and
    /// non-success HTTP statuses alike.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// [`PageFetcher`] backed by a blocking reqwest client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        if let Ok(referer) =
            HeaderValue::from_str(&format!("{}/", config.base_url.trim_end_matches('/')))
        {
            headers.insert(REFERER, referer);
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        HttpFetcher { client }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("Fetching {}", url);

        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(MercatoError::UpstreamStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text()?)
    }
}

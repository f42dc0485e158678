//! Source page retrieval
//!
//! One GET of the configured standings page per table load. No retries, no
//! caching; a failed or non-success response surfaces as a fetch error for
//! the boundary to translate.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{FetchError, Result};

/// Request timeout for the source fetch. Applies to the network call only;
/// the parse pass after it is synchronous and bounded by input size.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Seam between the pipeline and the network: anything that can produce
/// the standings page's HTML.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page body as text.
    async fn fetch_page(&self) -> Result<String>;
}

/// Fetches the standings page over HTTP.
pub struct HttpSource {
    client: Client,
    source: Url,
}

impl HttpSource {
    /// Build a source for the given URL.
    pub fn new(source: Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;
        Ok(Self { client, source })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    #[instrument(skip(self), fields(source = %self.source))]
    async fn fetch_page(&self) -> Result<String> {
        debug!("fetching standings page");
        let response = self
            .client
            .get(self.source.clone())
            .send()
            .await
            .map_err(FetchError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::BodyRead(e.to_string()))?;
        debug!(bytes = body.len(), "fetched standings page");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_source_builds() {
        let url = Url::parse("http://127.0.0.1:9999/table.html").unwrap();
        assert!(HttpSource::new(url).is_ok());
    }
}

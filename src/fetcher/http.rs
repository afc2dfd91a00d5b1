//! HTTP implementation of [`ResourceFetcher`]
//!
//! Downloads are buffered fully before returning. The body is streamed so the
//! size limit is enforced while reading, not only from `Content-Length`.

use futures::StreamExt;
use reqwest::header::ACCEPT;
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};

use super::errors::FetchError;
use super::retry::RetryPolicy;
use super::{FetchFuture, ResourceFetcher};
use crate::config::FetchConfig;
use crate::utils::constants::CHROME_USER_AGENT;

const ACCEPT_TEXT: &str = "text/javascript,text/css,*/*;q=0.1";
const ACCEPT_BINARY: &str = "font/woff2,font/woff,application/octet-stream,*/*;q=0.8";

/// `reqwest`-backed fetcher with retries and a response size cap
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    policy: RetryPolicy,
    max_response_bytes: usize,
}

impl HttpFetcher {
    /// Build a fetcher from the `fetch` section of the pack configuration.
    ///
    /// Redirects are not followed; a 3xx answer fails like any other non-200.
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(CHROME_USER_AGENT)
            .redirect(Policy::none())
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Build a fetcher around an existing client (shares its connection pool)
    #[must_use]
    pub fn with_client(client: Client, config: &FetchConfig) -> Self {
        Self {
            client,
            policy: RetryPolicy::from(config),
            max_response_bytes: config.max_response_bytes,
        }
    }

    async fn download(&self, url: &str, accept: &'static str) -> Result<Vec<u8>, FetchError> {
        self.policy
            .run(url, || self.download_once(url, accept))
            .await
    }

    /// Single GET: status check, size checks, buffered body
    async fn download_once(&self, url: &str, accept: &'static str) -> Result<Vec<u8>, FetchError> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(|source| transport_error(url, source))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Get expected size and enforce limit BEFORE downloading
        let expected_size = response.content_length().unwrap_or(0);
        if expected_size > self.max_response_bytes as u64 {
            return Err(FetchError::TooLarge {
                url: url.to_string(),
                size: expected_size,
                limit: self.max_response_bytes,
            });
        }

        let mut buffer = if expected_size > 0 {
            Vec::with_capacity(expected_size as usize)
        } else {
            Vec::new()
        };

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|source| transport_error(url, source))?;

            // Check BEFORE accumulating
            let new_total = buffer.len() + chunk.len();
            if new_total > self.max_response_bytes {
                return Err(FetchError::TooLarge {
                    url: url.to_string(),
                    size: new_total as u64,
                    limit: self.max_response_bytes,
                });
            }
            buffer.extend_from_slice(&chunk);
        }

        log::debug!("GET {url} -> {} bytes", buffer.len());
        Ok(buffer)
    }
}

fn transport_error(url: &str, source: reqwest::Error) -> FetchError {
    if source.is_timeout() {
        FetchError::Timeout { url: url.to_string() }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            source,
        }
    }
}

impl ResourceFetcher for HttpFetcher {
    fn fetch_text<'a>(&'a self, url: &'a str) -> FetchFuture<'a, String> {
        Box::pin(async move {
            let bytes = self.download(url, ACCEPT_TEXT).await?;
            String::from_utf8(bytes).map_err(|_| FetchError::InvalidUtf8 { url: url.to_string() })
        })
    }

    fn fetch_bytes<'a>(&'a self, url: &'a str) -> FetchFuture<'a, Vec<u8>> {
        Box::pin(self.download(url, ACCEPT_BINARY))
    }
}

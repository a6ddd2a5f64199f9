use crate::api::models::ApiErrorResponse;
use crate::config::Config;
use crate::error::{Result, ScraperError};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Videos,
    CommentThreads,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Videos => "videos",
            Endpoint::CommentThreads => "commentThreads",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Thin wrapper over `reqwest` for the two YouTube Data API endpoints.
///
/// The API key is supplied by the caller and appended to every request as the
/// `key` query parameter.
pub struct YouTubeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl YouTubeClient {
    pub fn new<S: Into<String>>(base_url: &str, api_key: S, timeout: Duration) -> Result<Self> {
        Url::parse(base_url).map_err(|e| ScraperError::Config {
            message: format!("Invalid API base URL {}: {}", base_url, e),
        })?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ScraperError::Network {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key().ok_or_else(|| ScraperError::Config {
            message: "No YouTube Data API key configured".to_string(),
        })?;

        Self::new(&config.api.base_url, api_key, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for `endpoint`, with the API key followed by `params`.
    pub fn endpoint_url(&self, endpoint: Endpoint, params: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url, endpoint.path());
        let query = std::iter::once(("key", self.api_key.as_str())).chain(params.iter().copied());

        Url::parse_with_params(&raw, query).map_err(|e| ScraperError::Config {
            message: format!("Invalid request URL {}: {}", raw, e),
        })
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.endpoint_url(endpoint, params)?;
        debug!(%endpoint, ?params, "sending request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        debug!(%endpoint, status = status.as_u16(), bytes = body.len(), "received response");

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .ok()
                .and_then(|envelope| envelope.error.message);

            return Err(ScraperError::Fetch {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| ScraperError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> ScraperError {
        if error.is_timeout() {
            ScraperError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            ScraperError::Network {
                message: error.to_string(),
            }
        }
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::{config::AppConfig, model::SearchResults, request::FetchError};

/// A single lookup against the lyrics search endpoint.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(
        &self,
        url: &str,
        text: &str,
        words: &str,
    ) -> Result<SearchResults, FetchError>;
}

pub struct ApiService {
    client: Client,
}

impl ApiService {
    pub fn new(config: &AppConfig) -> color_eyre::Result<Self> {
        Ok(Self::with_timeout(config.request_timeout)?)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl SearchApi for ApiService {
    async fn search(
        &self,
        url: &str,
        text: &str,
        words: &str,
    ) -> Result<SearchResults, FetchError> {
        let endpoint = Url::parse_with_params(url, &[("query", text), ("words", words)])
            .map_err(|e| FetchError::Network(format!("invalid search url {}: {}", url, e)))?;

        debug!(%endpoint, "sending search request");
        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(classify)?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_decode() {
        FetchError::Parse(err.to_string())
    } else if let Some(status) = err.status() {
        FetchError::HttpStatus {
            status: status.as_u16(),
        }
    } else {
        FetchError::Network(err.to_string())
    }
}

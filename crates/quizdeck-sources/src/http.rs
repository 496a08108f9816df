//! HTTP(S) quiz source.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tracing::{debug, instrument};

use quizdeck_core::{LoadError, QuizSource};

use crate::resource::check_resource;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Reads quiz resources from `<base_url>/<resource>`, bypassing caches.
pub struct HttpSource {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        anyhow::ensure!(!base_url.is_empty(), "HTTP source needs a base URL");

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
            client,
        })
    }

    fn url_for(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches("./"))
    }
}

#[async_trait]
impl QuizSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    fn location(&self) -> String {
        self.base_url.clone()
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch(&self, resource: &str) -> Result<String, LoadError> {
        check_resource(resource)?;
        let url = self.url_for(resource);

        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| LoadError::Network {
                resource: resource.to_string(),
                message: if e.is_timeout() {
                    format!("request timed out after {}s", self.timeout_secs)
                } else if e.is_connect() {
                    format!("{} is not reachable", self.base_url)
                } else {
                    e.to_string()
                },
            })?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "fetched");
        if !status.is_success() {
            return Err(LoadError::Unavailable {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| LoadError::Network {
            resource: resource.to_string(),
            message: format!("failed to read response body: {e}"),
        })
    }
}

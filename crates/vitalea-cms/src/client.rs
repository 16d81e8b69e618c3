//! HTTP client for the CMS content API.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use vitalea_core::{defaults, CmsQuery, ContentSource, Envelope, Error, Result};

use crate::config::CmsConfig;

/// Error envelope the CMS returns on non-2xx responses.
#[derive(Debug, Deserialize)]
struct CmsErrorEnvelope {
    error: CmsErrorBody,
}

#[derive(Debug, Deserialize)]
struct CmsErrorBody {
    #[allow(dead_code)]
    status: u16,
    name: String,
    message: String,
}

/// CMS content client.
///
/// Issues `GET {base}/api/{content_type}?{query}` requests and decodes the
/// `{ data, meta }` envelope. "Not found" and malformed media are not errors
/// at this layer — callers get an envelope to normalize, and `Error::NotFound`
/// only for a real 404 from the CMS.
pub struct CmsClient {
    client: Client,
    config: CmsConfig,
}

impl CmsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CmsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            base_url = %config.base_url,
            auth = if config.api_token.is_some() { "token" } else { "none" },
            "Initializing CMS client"
        );

        Ok(Self { client, config })
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(CmsConfig::default())
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(CmsConfig::from_env())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    /// The locale used when a call site does not pass one.
    pub fn default_locale(&self) -> &str {
        &self.config.default_locale
    }

    /// Prefix the CMS origin onto a relative media/file URL.
    ///
    /// Upload URLs come back relative (`/uploads/x.png`) unless the CMS sits
    /// behind a media CDN; absolute URLs pass through untouched.
    pub fn absolute_url(&self, url: &str) -> String {
        if url.starts_with("http") {
            url.to_string()
        } else {
            format!("{}{}", self.config.base_url.trim_end_matches('/'), url)
        }
    }

    /// Build the full request URL for a content path and query.
    fn endpoint(&self, path: &str, query: &CmsQuery) -> String {
        let mut url = format!(
            "{}{}/{}",
            self.config.base_url.trim_end_matches('/'),
            defaults::CMS_API_PREFIX,
            path
        );
        let encoded = query.encode();
        if !encoded.is_empty() {
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }

    /// Shared GET path for all fetch operations.
    async fn get(&self, op: &str, content_type: &str, path: &str, query: &CmsQuery) -> Result<Envelope> {
        let start = Instant::now();
        let url = self.endpoint(path, query);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<CmsErrorEnvelope>(&body)
                .map(|envelope| format!("{}: {}", envelope.error.name, envelope.error.message))
                .unwrap_or_else(|_| {
                    status.canonical_reason().unwrap_or("request failed").to_string()
                });

            debug!(
                op = op,
                content_type = content_type,
                status = status.as_u16(),
                error = %message,
                "CMS request failed"
            );

            return if status == reqwest::StatusCode::NOT_FOUND {
                Err(Error::NotFound(format!("{}: {}", content_type, message)))
            } else {
                Err(Error::Cms(format!("{} ({})", message, status.as_u16())))
            };
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| Error::Serialization(format!("Failed to parse CMS response: {}", e)))?;

        debug!(
            op = op,
            content_type = content_type,
            status = status.as_u16(),
            entry_count = envelope.entries().len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "CMS request complete"
        );

        Ok(envelope)
    }
}

#[async_trait]
impl ContentSource for CmsClient {
    async fn fetch_single(&self, content_type: &str, query: &CmsQuery) -> Result<Envelope> {
        self.get("fetch_single", content_type, content_type, query).await
    }

    async fn fetch_collection(&self, content_type: &str, query: &CmsQuery) -> Result<Envelope> {
        self.get("fetch_collection", content_type, content_type, query).await
    }

    async fn fetch_entry(&self, content_type: &str, id: &str, query: &CmsQuery) -> Result<Envelope> {
        let path = format!("{}/{}", content_type, id);
        self.get("fetch_entry", content_type, &path, query).await
    }
}

//! CMS client configuration.

use vitalea_core::defaults;

/// Configuration for the CMS client.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// Base URL of the CMS, without the `/api` prefix.
    pub base_url: String,
    /// Bearer token for authenticated content endpoints (optional; public
    /// content types need none).
    pub api_token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// Locale used when a call site does not pass one explicitly.
    pub default_locale: String,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::CMS_BASE_URL.to_string(),
            api_token: None,
            timeout_seconds: defaults::CMS_TIMEOUT_SECS,
            default_locale: defaults::DEFAULT_LOCALE.to_string(),
        }
    }
}

impl CmsConfig {
    /// Create from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `CMS_BASE_URL` | `http://localhost:1337` |
    /// | `CMS_API_TOKEN` | (none) |
    /// | `CMS_TIMEOUT_SECS` | 30 |
    /// | `CMS_DEFAULT_LOCALE` | `it` |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("CMS_BASE_URL")
                .unwrap_or_else(|_| defaults::CMS_BASE_URL.to_string()),
            api_token: std::env::var("CMS_API_TOKEN").ok().filter(|t| !t.is_empty()),
            timeout_seconds: std::env::var("CMS_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::CMS_TIMEOUT_SECS),
            default_locale: std::env::var("CMS_DEFAULT_LOCALE")
                .unwrap_or_else(|_| defaults::DEFAULT_LOCALE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CmsConfig::default();
        assert_eq!(config.base_url, "http://localhost:1337");
        assert!(config.api_token.is_none());
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.default_locale, "it");
    }
}

//! Startup configuration for the console.
//!
//! Read once at startup; there is no runtime reconfiguration. On targets
//! without an environment (the browser) the defaults apply and the embedder
//! overrides the base URL explicitly.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment-flagged feature toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub analytics: bool,
    pub notifications: bool,
    pub auto_refresh: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            analytics: false,
            notifications: true,
            auto_refresh: true,
        }
    }
}

/// Console-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Base URL of the Warden REST API, without a trailing slash.
    pub api_base_url: String,
    /// Per-request timeout (native targets only; the browser enforces its own).
    pub request_timeout: Duration,
    pub features: FeatureFlags,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            features: FeatureFlags::default(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from the environment, falling back to defaults for
    /// anything unset. Absent variables are not an error.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(url) = std::env::var("WARDEN_API_URL") {
            cfg.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = env_parse::<u64>("WARDEN_REQUEST_TIMEOUT_SECS") {
            cfg.request_timeout = Duration::from_secs(secs);
        }
        if let Some(v) = env_parse::<bool>("WARDEN_FEATURE_ANALYTICS") {
            cfg.features.analytics = v;
        }
        if let Some(v) = env_parse::<bool>("WARDEN_FEATURE_NOTIFICATIONS") {
            cfg.features.notifications = v;
        }
        if let Some(v) = env_parse::<bool>("WARDEN_FEATURE_AUTO_REFRESH") {
            cfg.features.auto_refresh = v;
        }

        cfg
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api_base_url = url.trim_end_matches('/').to_string();
        self
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(%key, %raw, "ignoring unparseable configuration value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = ConsoleConfig::default();
        assert!(!cfg.api_base_url.ends_with('/'));
        assert_eq!(cfg.request_timeout, Duration::from_secs(30));
        assert!(cfg.features.auto_refresh);
    }

    #[test]
    fn with_base_url_strips_trailing_slash() {
        let cfg = ConsoleConfig::default().with_base_url("https://mgmt.example.com/api/");
        assert_eq!(cfg.api_base_url, "https://mgmt.example.com/api");
    }
}

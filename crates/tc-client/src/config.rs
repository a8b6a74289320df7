//! Client configuration.

use std::time::Duration;

/// Environment variable naming the service base URL.
pub const API_URL_ENV: &str = "TOPOLOGY_API_URL";

/// Loopback address the service listens on by default.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Route of the topology computation.
pub const TOPOLOGY_PATH: &str = "/calculate_topology";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to reach the topology service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Read the base URL from `TOPOLOGY_API_URL`, falling back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            Some(url) => Self::default().with_base_url(url),
            None => Self::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the topology route.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), TOPOLOGY_PATH)
    }
}

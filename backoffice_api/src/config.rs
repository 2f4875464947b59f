//! Client configuration, read from the environment.

use std::time::Duration;

/// Base URL used when `BACKOFFICE_API_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`crate::Client`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Scheme, host and optional path prefix; entity paths are appended.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Reads `BACKOFFICE_API_URL` and `BACKOFFICE_TIMEOUT_SECS`, falling back
    /// to the defaults for missing or unparsable values.
    pub fn from_env() -> Self {
        Self {
            base_url: env_string("BACKOFFICE_API_URL", DEFAULT_BASE_URL),
            timeout: Duration::from_secs(env_u64("BACKOFFICE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
            user_agent: default_user_agent(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn default_user_agent() -> String {
    format!("backoffice-api/{}", env!("CARGO_PKG_VERSION"))
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|val| !val.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}

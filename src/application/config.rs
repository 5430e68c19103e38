use crate::constants::DEFAULT_BASE_URL;
use crate::utils::config::{get_env_or_default, get_env_or_none, get_env_required};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Connection settings for the Log10 service
pub struct Config {
    /// Base URL of the service, without a trailing slash
    pub base_url: String,
    /// API token sent as `x-log10-token`
    #[serde(skip_serializing, default)]
    pub api_token: String,
    /// Organization every request is scoped to
    pub organization_id: String,
    /// Request timeout in seconds; `None` keeps the transport default of no timeout
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment, reading `.env` first
    ///
    /// Uses `LOG10_URL`, `LOG10_TOKEN`, `LOG10_ORG_ID` and
    /// `LOG10_TIMEOUT_SECS`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url: String = get_env_or_default("LOG10_URL", String::from(DEFAULT_BASE_URL));

        Config {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: get_env_required("LOG10_TOKEN"),
            organization_id: get_env_required("LOG10_ORG_ID"),
            timeout: get_env_or_none("LOG10_TIMEOUT_SECS"),
        }
    }

    /// Builds a configuration from explicit values, without a timeout
    pub fn with_credentials(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        organization_id: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Config {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.into(),
            organization_id: organization_id.into(),
            timeout: None,
        }
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Some(secs);
        self
    }

    /// Request timeout as a `Duration`, if one is configured
    #[must_use]
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Absolute URL for an API path
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

//! Outbound HTTP client configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the shared HTTP client used to reach webhook receivers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Merge HTTP configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.timeout_seconds != default_timeout() {
            self.timeout_seconds = other.timeout_seconds;
        }
        if other.user_agent != default_user_agent() {
            self.user_agent = other.user_agent;
        }
        self
    }

    /// Build a `reqwest` client from these settings
    pub fn build_client(&self) -> crate::utils::error::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout())
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(|e| {
                crate::utils::error::NotifierError::config(format!(
                    "Failed to create HTTP client: {}",
                    e
                ))
            })
    }
}

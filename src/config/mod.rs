//! Configuration management for the notifier
//!
//! This module handles loading, validation, and merging of the notifier configuration.

pub mod models;
pub mod provider;
pub mod validation;

pub use models::*;
pub use provider::{SettingsProvider, SharedSettings};
pub use validation::Validate;

use crate::utils::error::{NotifierError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Main configuration struct for the notifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Destination and event filter
    #[serde(default)]
    pub webhook: WebhookSettings,
    /// Outbound HTTP client
    #[serde(default)]
    pub http: HttpClientConfig,
    /// Log subscriber
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Product name reported by the test notification
    #[serde(default = "default_source_name")]
    pub source_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook: WebhookSettings::default(),
            http: HttpClientConfig::default(),
            logging: LoggingConfig::default(),
            source_name: default_source_name(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = serde_yaml::from_str(&content)?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load a `.env` file into the process environment
    ///
    /// `None` searches the current directory and its parents. A missing file is
    /// not an error; an unreadable or malformed one is.
    pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>> {
        let loaded = match path {
            Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
            None => dotenvy::dotenv(),
        };

        match loaded {
            Ok(path) => {
                debug!("Loaded environment file: {:?}", path);
                Ok(Some(path))
            }
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(NotifierError::config(format!(
                "Failed to load environment file: {}",
                e
            ))),
        }
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("WEBHOOK_URL") {
            config.webhook.url = url;
        }
        if let Some(events) = lookup("WEBHOOK_EVENTS") {
            config.webhook.events = events;
        }
        if let Some(style) = lookup("WEBHOOK_STYLE") {
            config.webhook.style = style
                .parse()
                .map_err(|e| NotifierError::config(format!("Invalid WEBHOOK_STYLE: {}", e)))?;
        }
        if let Some(timeout) = lookup("WEBHOOK_TIMEOUT_SECONDS") {
            config.http.timeout_seconds = timeout
                .parse()
                .map_err(|e| NotifierError::config(format!("Invalid timeout: {}", e)))?;
        }
        if let Some(source) = lookup("WEBHOOK_SOURCE_NAME") {
            config.source_name = source;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            config.logging.format = format
                .parse()
                .map_err(|e| NotifierError::config(format!("Invalid LOG_FORMAT: {}", e)))?;
        }

        config.validate()?;
        debug!("Configuration loaded from environment variables");
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.webhook
            .validate()
            .map_err(|e| NotifierError::config(format!("Webhook config error: {}", e)))?;
        self.http
            .validate()
            .map_err(|e| NotifierError::config(format!("HTTP config error: {}", e)))?;
        self.logging
            .validate()
            .map_err(|e| NotifierError::config(format!("Logging config error: {}", e)))?;

        if self.source_name.trim().is_empty() {
            return Err(NotifierError::config("Source name cannot be empty"));
        }

        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.webhook = self.webhook.merge(other.webhook);
        self.http = self.http.merge(other.http);
        self.logging = self.logging.merge(other.logging);
        if other.source_name != default_source_name() {
            self.source_name = other.source_name;
        }
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

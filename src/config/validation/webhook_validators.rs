//! Validators for the webhook, HTTP and logging sections

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::{debug, warn};
use url::Url;

/// Check that a destination URL is an absolute http(s) URL with a host
pub fn validate_webhook_url(url_str: &str) -> Result<(), String> {
    let url = Url::parse(url_str).map_err(|e| format!("Webhook URL is invalid: {}", e))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(format!(
                "Webhook URL must use http:// or https:// scheme, got: {}",
                scheme
            ));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err("Webhook URL must have a host".to_string());
    }

    Ok(())
}

impl Validate for WebhookSettings {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating webhook settings");

        // An empty URL is valid and means delivery is disabled
        if self.url.trim().is_empty() {
            return Ok(());
        }
        validate_webhook_url(self.url.trim())?;

        for entry in self.events.split(',').map(str::trim) {
            if entry.chars().any(char::is_whitespace) {
                warn!(entry, "Event filter entry contains whitespace and will never match");
            }
        }

        Ok(())
    }
}

impl Validate for HttpClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.timeout_seconds == 0 {
            return Err("HTTP timeout must be greater than 0".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("User-Agent cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}

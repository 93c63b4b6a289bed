//! Webhook destination settings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payload shape expected by the receiving endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadStyle {
    /// Pick the shape from the destination URL
    #[default]
    Auto,
    /// Discord-style `embeds` array
    Embeds,
    /// Slack-style `attachments` array
    Attachments,
}

impl fmt::Display for PayloadStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Embeds => "embeds",
            Self::Attachments => "attachments",
        };
        f.write_str(name)
    }
}

impl FromStr for PayloadStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "embeds" | "discord" => Ok(Self::Embeds),
            "attachments" | "slack" => Ok(Self::Attachments),
            other => Err(format!("unknown payload style: {}", other)),
        }
    }
}

/// Destination and filter for audit event notifications
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WebhookSettings {
    /// Destination URL; empty disables delivery
    #[serde(default)]
    pub url: String,
    /// Comma-separated allow-list of event kinds; empty allows every event
    #[serde(default)]
    pub events: String,
    /// Payload shape override
    #[serde(default)]
    pub style: PayloadStyle,
}

impl WebhookSettings {
    /// Settings pointing at `url` with no event filter
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_events(mut self, events: impl Into<String>) -> Self {
        self.events = events.into();
        self
    }

    pub fn with_style(mut self, style: PayloadStyle) -> Self {
        self.style = style;
        self
    }

    /// Whether a destination is configured
    pub fn is_enabled(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Parsed allow-list, empty when every event is allowed
    pub fn allowed_events(&self) -> Vec<&str> {
        self.events
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect()
    }

    /// Merge webhook settings (other takes precedence when set)
    pub fn merge(mut self, other: Self) -> Self {
        if !other.url.is_empty() {
            self.url = other.url;
        }
        if !other.events.is_empty() {
            self.events = other.events;
        }
        if other.style != PayloadStyle::default() {
            self.style = other.style;
        }
        self
    }
}

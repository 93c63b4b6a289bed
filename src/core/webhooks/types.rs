//! Webhook type definitions
//!
//! This module contains the destination-agnostic notification payload and the
//! wire body it is wrapped in right before serialization.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Accent color shared by every notification (0x58B9FF)
pub const ACCENT_COLOR: u32 = 5_814_783;

/// One name/value row of a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadField {
    pub name: String,
    pub value: String,
    /// Rendering hint: show side by side with neighbouring fields
    pub inline: bool,
}

impl PayloadField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

/// Notification built for a single delivery
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationPayload {
    pub title: String,
    pub color: u32,
    pub fields: Vec<PayloadField>,
    #[serde(serialize_with = "serialize_rfc3339")]
    pub timestamp: DateTime<Utc>,
}

impl NotificationPayload {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&PayloadField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Timestamp as sent on the wire
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

fn serialize_rfc3339<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Top-level JSON body posted to the receiver
///
/// Exactly one of `embeds` or `attachments` is populated; empty members are
/// left out of the output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WebhookBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Discord convention
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<NotificationPayload>,
    /// Slack convention
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<NotificationPayload>,
}

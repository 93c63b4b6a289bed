//! Destination adapter
//!
//! Receivers disagree on where the notification goes: Discord reads
//! `embeds`, Slack reads `attachments`. The shape is chosen per delivery,
//! right before the body is encoded.

use super::types::{NotificationPayload, WebhookBody};
use crate::config::PayloadStyle;
use crate::utils::error::Result;

/// Host fragment identifying Slack incoming webhooks
pub const SLACK_WEBHOOK_HOST: &str = "hooks.slack.com";

/// Concrete payload shape of a single delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Embeds,
    Attachments,
}

impl Destination {
    /// Resolve the shape for `url`, honoring an explicit style override
    pub fn resolve(url: &str, style: PayloadStyle) -> Self {
        match style {
            PayloadStyle::Embeds => Self::Embeds,
            PayloadStyle::Attachments => Self::Attachments,
            PayloadStyle::Auto => Self::detect(url),
        }
    }

    /// Guess the shape from the destination URL
    ///
    /// Any URL containing [`SLACK_WEBHOOK_HOST`] is treated as Slack, relays included.
    /// The match is case-sensitive.
    pub fn detect(url: &str) -> Self {
        if url.contains(SLACK_WEBHOOK_HOST) {
            Self::Attachments
        } else {
            Self::Embeds
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Embeds => "embeds",
            Self::Attachments => "attachments",
        }
    }

    /// Wrap the payload under this destination's key
    pub fn wrap(self, payload: NotificationPayload) -> WebhookBody {
        match self {
            Self::Embeds => WebhookBody {
                embeds: vec![payload],
                ..Default::default()
            },
            Self::Attachments => WebhookBody {
                attachments: vec![payload],
                ..Default::default()
            },
        }
    }
}

/// Encode `payload` as the JSON body expected by the receiver at `url`
pub fn serialize_for_destination(
    url: &str,
    style: PayloadStyle,
    payload: NotificationPayload,
) -> Result<Vec<u8>> {
    let body = Destination::resolve(url, style).wrap(payload);
    Ok(serde_json::to_vec(&body)?)
}

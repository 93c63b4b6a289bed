//! Notification builders
//!
//! This module turns audit events, and the static connectivity check, into
//! [`NotificationPayload`]s.

use super::format::{format_location, title_from_event_kind, value_or_placeholder};
use super::types::{ACCENT_COLOR, NotificationPayload, PayloadField};
use crate::core::audit::AuditEvent;

/// Title of the connectivity check notification
pub const TEST_TITLE: &str = "Test Webhook";

/// Build the notification for an audit event
///
/// The four standard fields come first, followed by one field per extra
/// attribute, sorted by key.
pub fn build_event_payload(event: &AuditEvent) -> NotificationPayload {
    let opt = |value: &Option<String>| value.as_deref().unwrap_or_default().to_string();

    let location = format_location(
        event.country.as_deref().unwrap_or_default(),
        event.city.as_deref().unwrap_or_default(),
    );

    let mut fields = Vec::with_capacity(4 + event.data.len());
    fields.push(PayloadField::new(
        "User",
        value_or_placeholder(&opt(&event.username)),
        true,
    ));
    fields.push(PayloadField::new(
        "IP Address",
        value_or_placeholder(&opt(&event.ip_address)),
        true,
    ));
    fields.push(PayloadField::new(
        "Location",
        value_or_placeholder(&location),
        true,
    ));
    fields.push(PayloadField::new(
        "Device",
        value_or_placeholder(&opt(&event.user_agent)),
        true,
    ));

    let mut extra: Vec<_> = event.data.iter().collect();
    extra.sort_by(|a, b| a.0.cmp(b.0));
    fields.extend(
        extra
            .into_iter()
            .map(|(key, value)| PayloadField::new(key.clone(), value_or_placeholder(value), true)),
    );

    NotificationPayload {
        title: title_from_event_kind(event.kind.as_str()),
        color: ACCENT_COLOR,
        fields,
        timestamp: event.created_at,
    }
}

/// Build the connectivity check notification, stamped with the current time
pub fn build_test_payload(source_name: &str) -> NotificationPayload {
    NotificationPayload {
        title: TEST_TITLE.to_string(),
        color: ACCENT_COLOR,
        fields: vec![
            PayloadField::new("Status", "Connection successful", false),
            PayloadField::new("Source", source_name, true),
        ],
        timestamp: chrono::Utc::now(),
    }
}

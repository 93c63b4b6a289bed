//! Webhook notifier
//!
//! [`WebhookNotifier`] ties the pieces together: it reads the settings,
//! applies the event filter, builds the notification and hands it to
//! delivery. The event path never fails; the test path reports every error.

use super::context::CallContext;
use super::destination::serialize_for_destination;
use super::events::{build_event_payload, build_test_payload};
use super::filter::is_event_allowed;
use crate::config::{Config, SettingsProvider, WebhookSettings, default_source_name};
use crate::core::audit::AuditEvent;
use crate::utils::error::{NotifierError, Result};
use reqwest::Client;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// What happened to a single audit event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// No destination configured
    Disabled,
    /// The event filter rejected the event
    Filtered,
    /// The receiver accepted the notification
    Delivered,
    /// Delivery failed; the error has been logged
    Failed,
}

/// Sends audit event notifications to the configured webhook
#[derive(Clone)]
pub struct WebhookNotifier {
    /// HTTP client for webhook requests
    pub(super) client: Client,
    /// Live settings, read on every call
    settings: Arc<dyn SettingsProvider>,
    /// Product name shown by the test notification
    source_name: String,
}

impl WebhookNotifier {
    /// Create a notifier using an existing HTTP client
    pub fn new(client: Client, settings: impl SettingsProvider + 'static) -> Self {
        Self {
            client,
            settings: Arc::new(settings),
            source_name: default_source_name(),
        }
    }

    /// Create a notifier from the loaded configuration
    ///
    /// `settings` is the live source; `config.webhook` is only its initial value.
    pub fn from_config(config: &Config, settings: impl SettingsProvider + 'static) -> Result<Self> {
        let client = config.http.build_client()?;
        Ok(Self::new(client, settings).with_source_name(config.source_name.clone()))
    }

    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Current settings snapshot
    pub fn settings(&self) -> WebhookSettings {
        self.settings.webhook_settings()
    }

    /// Send a notification for `event` if the settings allow it
    ///
    /// Never returns an error: failures are logged with the event kind and
    /// reported as [`NotifyOutcome::Failed`].
    pub async fn notify_event(&self, event: &AuditEvent, ctx: &CallContext) -> NotifyOutcome {
        let settings = self.settings.webhook_settings();
        if !settings.is_enabled() {
            return NotifyOutcome::Disabled;
        }

        if !is_event_allowed(event.kind.as_str(), &settings.events) {
            debug!(event = %event.kind, "Event not in webhook filter, skipping");
            return NotifyOutcome::Filtered;
        }

        let payload = build_event_payload(event);
        match self.deliver(&settings, payload, ctx).await {
            Ok(()) => NotifyOutcome::Delivered,
            Err(e) => {
                error!(error = %e, event = %event.kind, "Failed to send webhook");
                NotifyOutcome::Failed
            }
        }
    }

    /// Run [`notify_event`](Self::notify_event) on a detached task
    ///
    /// The caller does not need to await the handle; the event path must not
    /// wait on webhook latency.
    pub fn spawn_notify(&self, event: AuditEvent, ctx: CallContext) -> JoinHandle<NotifyOutcome> {
        let notifier = self.clone();
        tokio::spawn(async move { notifier.notify_event(&event, &ctx).await })
    }

    /// Send the connectivity check notification and report the result
    pub async fn send_test_notification(&self, ctx: &CallContext) -> Result<()> {
        let settings = self.settings.webhook_settings();
        if !settings.is_enabled() {
            return Err(NotifierError::NotConfigured);
        }

        info!("Sending test webhook");
        let payload = build_test_payload(&self.source_name);
        self.deliver(&settings, payload, ctx).await
    }

    /// Body that would be posted for `event` under the current settings
    pub fn preview_event(&self, event: &AuditEvent) -> Result<Vec<u8>> {
        let settings = self.settings.webhook_settings();
        serialize_for_destination(settings.url.trim(), settings.style, build_event_payload(event))
    }
}

impl std::fmt::Debug for WebhookNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookNotifier")
            .field("source_name", &self.source_name)
            .finish_non_exhaustive()
    }
}

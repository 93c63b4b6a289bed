//! Read-only access to the live webhook settings
//!
//! The notifier never caches settings: every dispatch asks its provider for a
//! fresh snapshot, so an update made through [`SharedSettings::update`] is
//! picked up by the next event.

use super::models::WebhookSettings;
use super::validation::Validate;
use crate::utils::error::{NotifierError, Result};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

/// Source of the current webhook settings
pub trait SettingsProvider: Send + Sync {
    /// Snapshot of the settings at call time
    fn webhook_settings(&self) -> WebhookSettings;
}

impl SettingsProvider for WebhookSettings {
    fn webhook_settings(&self) -> WebhookSettings {
        self.clone()
    }
}

impl<T: SettingsProvider + ?Sized> SettingsProvider for Arc<T> {
    fn webhook_settings(&self) -> WebhookSettings {
        (**self).webhook_settings()
    }
}

/// Settings shared between the settings surface and the notifier
#[derive(Debug, Clone, Default)]
pub struct SharedSettings {
    inner: Arc<RwLock<WebhookSettings>>,
}

impl SharedSettings {
    pub fn new(settings: WebhookSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    /// Replace the settings after validating them
    pub fn update(&self, settings: WebhookSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| NotifierError::config(format!("Webhook settings error: {}", e)))?;

        info!(
            enabled = settings.is_enabled(),
            events = %settings.events,
            style = %settings.style,
            "Updating webhook settings"
        );
        *self.inner.write() = settings;
        Ok(())
    }
}

impl SettingsProvider for SharedSettings {
    fn webhook_settings(&self) -> WebhookSettings {
        self.inner.read().clone()
    }
}

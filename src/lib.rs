//! # audit-webhook
//!
//! Posts account-security audit events (sign-ins, client authorizations,
//! passkey changes) to a chat webhook. Discord-style `embeds` and Slack-style
//! `attachments` receivers are both supported; the shape is picked from the
//! destination URL unless configured explicitly.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use audit_webhook::{AuditEvent, AuditEventKind, CallContext, SharedSettings, WebhookNotifier, WebhookSettings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = SharedSettings::new(
//!         WebhookSettings::new("https://discord.com/api/webhooks/123/token")
//!             .with_events("SIGN_IN, NEW_CLIENT_AUTHORIZATION"),
//!     );
//!     let notifier = WebhookNotifier::new(reqwest::Client::new(), settings);
//!
//!     // Interactive check: errors are returned
//!     notifier.send_test_notification(&CallContext::background()).await?;
//!
//!     // Event path: runs detached, failures are only logged
//!     let event = AuditEvent::new(AuditEventKind::SignIn).with_username("alice");
//!     notifier.spawn_notify(event, CallContext::background());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod utils;

pub use config::{Config, PayloadStyle, SettingsProvider, SharedSettings, WebhookSettings};
pub use crate::core::audit::{AuditEvent, AuditEventKind};
pub use crate::core::webhooks::{
    CallContext, CancelHandle, CancelSignal, NotificationPayload, NotifyOutcome, WebhookNotifier,
    cancel_pair, is_event_allowed,
};
pub use utils::error::{NotifierError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("AUDIT_WEBHOOK_BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("AUDIT_WEBHOOK_GIT_HASH").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}

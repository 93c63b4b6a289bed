//! Configuration data models
//!
//! This module defines all configuration structures used by the notifier.

pub mod http;
pub mod logging;
pub mod webhook;

pub use http::*;
pub use logging::*;
pub use webhook::*;

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    10
}

pub fn default_user_agent() -> String {
    format!("{}/{}", crate::NAME, crate::VERSION)
}

pub fn default_log_level() -> String {
    "info".to_string()
}

/// Product name reported by the test notification
pub fn default_source_name() -> String {
    "Audit Webhook".to_string()
}

//! Error handling for the notifier
//!
//! This module defines all error types used throughout the crate.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for the notifier
pub type Result<T> = std::result::Result<T, NotifierError>;

/// Main error type for the notifier
#[derive(Error, Debug)]
pub enum NotifierError {
    /// No destination URL is configured
    #[error("webhook URL is not configured")]
    NotConfigured,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Payload could not be encoded
    #[error("failed to marshal webhook payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The outbound request could not be built
    #[error("failed to create webhook request: {0}")]
    Request(String),

    /// The request was sent but the exchange failed
    #[error("failed to send webhook request: {0}")]
    Transport(String),

    /// The caller's deadline elapsed before the exchange completed
    #[error("failed to send webhook request: timed out after {0:?}")]
    Timeout(Duration),

    /// The caller cancelled the exchange
    #[error("failed to send webhook request: cancelled")]
    Cancelled,

    /// The receiver answered outside the 2xx range
    #[error("webhook returned non-success status: {status}")]
    Status { status: u16 },
}

impl NotifierError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// True when the failure is a missing destination rather than a delivery problem
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured)
    }

    /// True for failures that happened on the wire, including deadline and cancellation
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Timeout(_) | Self::Cancelled
        )
    }

    /// HTTP status returned by the receiver, when the failure carries one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NotifierError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Request(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
            }
        } else {
            Self::Transport(err.to_string())
        }
    }
}

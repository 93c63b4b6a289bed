//! Audit event kinds

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Kind of an audit event
///
/// Known kinds serialize to their `SCREAMING_SNAKE_CASE` identifier; anything
/// else round-trips verbatim through [`AuditEventKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuditEventKind {
    SignIn,
    TokenSignIn,
    OneTimeAccessTokenSignIn,
    ClientAuthorization,
    NewClientAuthorization,
    DeviceCodeAuthorization,
    NewDeviceCodeAuthorization,
    PasskeyAdded,
    PasskeyRemoved,
    /// Unrecognized identifier, kept as-is
    Other(String),
}

impl AuditEventKind {
    /// Every known kind, in declaration order
    pub const KNOWN: [AuditEventKind; 9] = [
        Self::SignIn,
        Self::TokenSignIn,
        Self::OneTimeAccessTokenSignIn,
        Self::ClientAuthorization,
        Self::NewClientAuthorization,
        Self::DeviceCodeAuthorization,
        Self::NewDeviceCodeAuthorization,
        Self::PasskeyAdded,
        Self::PasskeyRemoved,
    ];

    /// Wire identifier of this kind
    pub fn as_str(&self) -> &str {
        match self {
            Self::SignIn => "SIGN_IN",
            Self::TokenSignIn => "TOKEN_SIGN_IN",
            Self::OneTimeAccessTokenSignIn => "ONE_TIME_ACCESS_TOKEN_SIGN_IN",
            Self::ClientAuthorization => "CLIENT_AUTHORIZATION",
            Self::NewClientAuthorization => "NEW_CLIENT_AUTHORIZATION",
            Self::DeviceCodeAuthorization => "DEVICE_CODE_AUTHORIZATION",
            Self::NewDeviceCodeAuthorization => "NEW_DEVICE_CODE_AUTHORIZATION",
            Self::PasskeyAdded => "PASSKEY_ADDED",
            Self::PasskeyRemoved => "PASSKEY_REMOVED",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for AuditEventKind {
    fn from(raw: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|kind| kind.as_str() == raw)
            .cloned()
            .unwrap_or_else(|| Self::Other(raw.to_string()))
    }
}

impl From<String> for AuditEventKind {
    fn from(raw: String) -> Self {
        match Self::from(raw.as_str()) {
            Self::Other(_) => Self::Other(raw),
            known => known,
        }
    }
}

impl FromStr for AuditEventKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for AuditEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AuditEventKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AuditEventKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw))
    }
}

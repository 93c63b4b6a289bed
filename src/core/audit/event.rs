//! Audit event record

use super::AuditEventKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A recorded account-security event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event kind
    #[serde(rename = "event")]
    pub kind: AuditEventKind,
    /// Account the event concerns
    #[serde(default)]
    pub username: Option<String>,
    /// Client IP address
    #[serde(default)]
    pub ip_address: Option<String>,
    /// GeoIP country
    #[serde(default)]
    pub country: Option<String>,
    /// GeoIP city
    #[serde(default)]
    pub city: Option<String>,
    /// Client User-Agent
    #[serde(default)]
    pub user_agent: Option<String>,
    /// When the event was recorded
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Free-form attributes, e.g. the client name of an authorization
    #[serde(default)]
    pub data: HashMap<String, String>,
}

impl AuditEvent {
    /// New event of `kind` recorded now
    pub fn new(kind: impl Into<AuditEventKind>) -> Self {
        Self {
            kind: kind.into(),
            username: None,
            ip_address: None,
            country: None,
            city: None,
            user_agent: None,
            created_at: Utc::now(),
            data: HashMap::new(),
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_ip_address(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }

    pub fn with_location(mut self, country: impl Into<String>, city: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self.city = Some(city.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Add one free-form attribute
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

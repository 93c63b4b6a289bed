//! Audit event fixtures

use audit_webhook::{AuditEvent, AuditEventKind};
use chrono::{TimeZone, Utc};
use uuid::Uuid;

/// Factory for audit events with realistic defaults
pub struct AuditEventFactory;

impl AuditEventFactory {
    /// A fully populated sign-in
    pub fn sign_in() -> AuditEvent {
        AuditEvent::new(AuditEventKind::SignIn)
            .with_username(format!("user_{}", &Uuid::new_v4().to_string()[..8]))
            .with_ip_address("198.51.100.23")
            .with_location("DE", "Berlin")
            .with_user_agent("Mozilla/5.0 (X11; Linux x86_64) Firefox/125.0")
            .with_created_at(Utc.with_ymd_and_hms(2024, 5, 17, 8, 15, 42).unwrap())
    }

    /// A client authorization carrying the client name as an extra attribute
    pub fn new_client_authorization(client_name: &str) -> AuditEvent {
        let mut event = Self::sign_in();
        event.kind = AuditEventKind::NewClientAuthorization;
        event.with_data("clientName", client_name)
    }

    /// An event with only its kind set
    pub fn bare(kind: &str) -> AuditEvent {
        AuditEvent::new(kind)
    }
}

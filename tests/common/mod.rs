//! Common test utilities for audit-webhook

pub mod assertions;
pub mod fixtures;
pub mod receiver;

pub use assertions::WebhookBodyAssertions;
pub use fixtures::AuditEventFactory;
pub use receiver::MockReceiver;

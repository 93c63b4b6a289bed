//! Audit event model
//!
//! Account-security events recorded by the identity provider. The notifier
//! only reads them.

mod event;
mod kind;

pub use event::AuditEvent;
pub use kind::AuditEventKind;

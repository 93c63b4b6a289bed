//! Integration tests for audit-webhook
//!
//! These tests drive a real `WebhookNotifier` against a local mock receiver.

pub mod config_tests;
pub mod test_notification_tests;

//! Core functionality of the notifier
//!
//! - `audit`: the audit events the notifier reacts to
//! - `webhooks`: payload building, filtering and delivery

pub mod audit;
pub mod webhooks;

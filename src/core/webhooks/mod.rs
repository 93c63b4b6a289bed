//! Webhook notifications for audit events
//!
//! Audit event -> settings snapshot -> event filter -> payload builder ->
//! destination adapter -> HTTP POST. Delivery is attempted once; the event
//! path only logs failures, the test path returns them.

mod context;
mod delivery;
mod destination;
mod events;
mod filter;
mod format;
mod manager;
mod types;

pub use context::{CallContext, CancelHandle, CancelSignal, cancel_pair};
pub use destination::{Destination, SLACK_WEBHOOK_HOST, serialize_for_destination};
pub use events::{TEST_TITLE, build_event_payload, build_test_payload};
pub use filter::is_event_allowed;
pub use format::{format_location, title_from_event_kind, value_or_placeholder};
pub use manager::{NotifyOutcome, WebhookNotifier};
pub use types::{ACCENT_COLOR, NotificationPayload, PayloadField, WebhookBody};

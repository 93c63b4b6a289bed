//! Event filter

/// Whether `event_kind` may trigger a delivery under `filter`
///
/// An empty filter allows everything. Otherwise the filter is a
/// comma-separated allow-list compared exactly, after trimming each entry.
pub fn is_event_allowed(event_kind: &str, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }

    filter
        .split(',')
        .any(|allowed| allowed.trim() == event_kind)
}

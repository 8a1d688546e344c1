// Time-based custom widget ids
use crate::domain::id::WidgetIdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};

const CUSTOM_WIDGET_PREFIX: &str = "customWidget";

/// Yields `customWidget-<unix millis>-<sequence>`.
///
/// The sequence keeps ids distinct when several widgets are created within
/// the same millisecond.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    sequence: AtomicU64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WidgetIdGenerator for TimestampIdGenerator {
    fn next_id(&self) -> String {
        let millis = chrono::Utc::now().timestamp_millis();
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}-{}", CUSTOM_WIDGET_PREFIX, millis, seq)
    }
}

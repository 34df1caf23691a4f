//! Time comparisons against the wall clock and between instants.

use chrono::{DateTime, TimeDelta, Utc};

/// Whether the current time is past `start + delay`.
pub fn has_delay_passed(start: DateTime<Utc>, delay: TimeDelta) -> bool {
    match start.checked_add_signed(delay) {
        Some(deadline) => Utc::now() > deadline,
        None => false,
    }
}

/// Whether `check` lies strictly between `start` and `end`.
pub fn is_time_in_range(start: DateTime<Utc>, end: DateTime<Utc>, check: DateTime<Utc>) -> bool {
    check > start && check < end
}

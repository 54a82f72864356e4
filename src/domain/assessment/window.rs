//! Resubmission window arithmetic.

use crate::domain::foundation::Timestamp;

/// Length of the resubmission cooldown, in days.
pub const RESUBMISSION_WINDOW_DAYS: i64 = 30;

/// Earliest creation time that still blocks a submission made at `now`.
///
/// Continuous timestamp arithmetic: exactly 30 × 24h before `now`.
pub fn resubmission_window_start(now: Timestamp) -> Timestamp {
    now.minus_days(RESUBMISSION_WINDOW_DAYS)
}

/// True when a submission created at `submitted_at` blocks a new one at `now`.
pub fn blocks_resubmission(submitted_at: Timestamp, now: Timestamp) -> bool {
    submitted_at >= resubmission_window_start(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    fn now() -> Timestamp {
        let dt = DateTime::parse_from_rfc3339("2024-06-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Timestamp::from_datetime(dt)
    }

    #[test]
    fn thirty_days_and_one_second_ago_does_not_block() {
        let submitted = now().minus(Duration::days(30) + Duration::seconds(1));
        assert!(!blocks_resubmission(submitted, now()));
    }

    #[test]
    fn twenty_nine_days_twenty_three_hours_ago_blocks() {
        let submitted = now().minus(Duration::days(29) + Duration::hours(23));
        assert!(blocks_resubmission(submitted, now()));
    }

    #[test]
    fn exactly_on_the_boundary_blocks() {
        let submitted = now().minus_days(30);
        assert!(blocks_resubmission(submitted, now()));
    }
}

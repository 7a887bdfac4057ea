//! Nightly availability window of the judgment open-data service.
//!
//! The service only answers between 00:00 and 06:00 Taipei time. Nothing in
//! the clients enforces this; callers use these helpers to explain failures
//! outside the window.

use std::ops::Range;

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Asia::Taipei;

/// Hours of the day (Taipei time) during which the service is available.
pub const SERVICE_HOURS: Range<u32> = 0..6;

/// Whether `hour` (0-23, Taipei time) falls inside [`SERVICE_HOURS`].
pub fn is_service_hour(hour: u32) -> bool {
    SERVICE_HOURS.contains(&hour)
}

/// Current hour of the day in Taipei.
pub fn taipei_hour_now() -> u32 {
    taipei_hour(Utc::now())
}

/// Whether the service is expected to be available right now.
pub fn in_service_window() -> bool {
    is_service_hour(taipei_hour_now())
}

/// Whether the service is expected to be available at `instant`.
pub fn in_service_window_at(instant: DateTime<Utc>) -> bool {
    is_service_hour(taipei_hour(instant))
}

fn taipei_hour(instant: DateTime<Utc>) -> u32 {
    instant.with_timezone(&Taipei).hour()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{in_service_window_at, is_service_hour};

    #[test]
    fn window_covers_first_six_hours() {
        assert!(is_service_hour(0));
        assert!(is_service_hour(5));
        assert!(!is_service_hour(6));
        assert!(!is_service_hour(23));
    }

    #[test]
    fn window_is_evaluated_in_taipei_time() {
        // 17:30 UTC is 01:30 the next day in Taipei.
        let inside = Utc.with_ymd_and_hms(2024, 8, 7, 17, 30, 0).single().expect("valid instant");
        assert!(in_service_window_at(inside));

        // 01:30 UTC is 09:30 in Taipei.
        let outside = Utc.with_ymd_and_hms(2024, 8, 8, 1, 30, 0).single().expect("valid instant");
        assert!(!in_service_window_at(outside));
    }
}

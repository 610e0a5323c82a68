//! Studio Clock
//!
//! Manila wall-clock string shown in the site header. Formatting is a pure
//! function over UTC so it can be unit tested; the wasm side only supplies
//! `Utc::now()` and a one-minute interval.

use chrono::{DateTime, FixedOffset, Utc};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use send_wrapper::SendWrapper;

/// Manila is UTC+8 all year; no DST
const MANILA_UTC_OFFSET_SECS: i32 = 8 * 3600;

/// Header clock refresh period. The clock is not drift-corrected; a minute
/// tick is accurate enough for a wall clock without seconds.
const CLOCK_TICK_MS: u32 = 60_000;

/// Format a UTC instant as the studio's local wall clock: 12-hour with
/// 2-digit hour and minute ("04:30 PM"), the en-US short time layout.
pub fn format_studio_time(instant: DateTime<Utc>) -> String {
    let manila = FixedOffset::east_opt(MANILA_UTC_OFFSET_SECS).expect("UTC+8 is a valid offset");
    instant.with_timezone(&manila).format("%I:%M %p").to_string()
}

fn studio_time_now() -> String {
    format_studio_time(Utc::now())
}

/// Clock signal for the header: computed immediately, then refreshed every
/// minute until the owner is cleaned up.
pub fn use_studio_clock() -> ReadSignal<String> {
    let (time, set_time) = signal(studio_time_now());

    let interval = SendWrapper::new(Interval::new(CLOCK_TICK_MS, move || {
        set_time.set(studio_time_now());
    }));
    on_cleanup(move || drop(interval));

    time
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_afternoon_in_manila() {
        // 08:30 UTC is 16:30 in Manila
        let utc = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap();
        assert_eq!(format_studio_time(utc), "04:30 PM");
    }

    #[test]
    fn test_midnight_rolls_to_next_day() {
        // 16:00 UTC is midnight in Manila
        let utc = Utc.with_ymd_and_hms(2024, 6, 1, 16, 0, 0).unwrap();
        assert_eq!(format_studio_time(utc), "12:00 AM");
    }

    #[test]
    fn test_hour_and_minute_are_zero_padded() {
        // 01:07 UTC is 09:07 in Manila
        let utc = Utc.with_ymd_and_hms(2024, 6, 1, 1, 7, 0).unwrap();
        assert_eq!(format_studio_time(utc), "09:07 AM");
    }

    #[test]
    fn test_noon_is_pm() {
        let utc = Utc.with_ymd_and_hms(2024, 6, 1, 4, 0, 0).unwrap();
        assert_eq!(format_studio_time(utc), "12:00 PM");
    }
}

use chrono::{DateTime, Duration, Local, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const CLOCK_FORMAT: &str = "%H:%M:%S";
    pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Trailing window as a chrono duration.
    pub fn window(window_minutes: u32) -> Duration {
        Duration::minutes(i64::from(window_minutes))
    }

    /// Oldest instant still inside a window ending at `now`.
    pub fn window_start(now: DateTime<Utc>, window_minutes: u32) -> DateTime<Utc> {
        now - Self::window(window_minutes)
    }
}

/// Local wall-clock time of day, for axis ticks.
pub fn epoch_secs_to_local_clock(epoch_secs: f64) -> String {
    let millis = (epoch_secs * 1000.0).round() as i64;
    match DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format(TimeUtils::CLOCK_FORMAT)
            .to_string(),
        None => String::new(),
    }
}

/// Local date and time, for hover labels.
pub fn utc_to_local_stamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format(TimeUtils::STAMP_FORMAT)
        .to_string()
}

/// Compact age such as `4.2s` or `3.0m`.
pub fn format_age(age: std::time::Duration) -> String {
    let seconds = age.as_secs_f64();
    if seconds < 60.0 {
        format!("{:.1}s", seconds)
    } else if seconds < 3_600.0 {
        format!("{:.1}m", seconds / 60.0)
    } else {
        format!("{:.1}h", seconds / 3_600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn window_start_subtracts_minutes() {
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 10, 30, 0).unwrap();
        assert_eq!(
            TimeUtils::window_start(now, 15),
            Utc.with_ymd_and_hms(2025, 5, 1, 10, 15, 0).unwrap()
        );
        assert_eq!(TimeUtils::window_start(now, 0), now);
    }

    #[test]
    fn ages_pick_a_readable_unit() {
        assert_eq!(format_age(std::time::Duration::from_millis(4_200)), "4.2s");
        assert_eq!(format_age(std::time::Duration::from_secs(180)), "3.0m");
        assert_eq!(format_age(std::time::Duration::from_secs(7_200)), "2.0h");
    }
}

use chrono::{DateTime, Local, TimeZone, Timelike};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_5_MIN: i64 = Self::MS_IN_S * 60 * 5;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const MS_IN_W: i64 = Self::MS_IN_D * 7;
    pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";
    pub const CLOCK_FORMAT: &str = "%H:%M";
}

// Time Helper functions

pub fn local_now_as_timestamp_ms() -> i64 {
    let now_local = Local::now();
    now_local.timestamp_millis()
}

/// Epoch millis -> local wall-clock `HH:MM`. Display only.
pub fn epoch_ms_to_clock(epoch_ms: i64) -> String {
    match Local.timestamp_millis_opt(epoch_ms).single() {
        Some(dt) => dt.format(TimeUtils::CLOCK_FORMAT).to_string(),
        None => "--:--".to_string(),
    }
}

/// Epoch millis -> local `YYYY-MM-DD`. Display only.
pub fn epoch_ms_to_date_string(epoch_ms: i64) -> String {
    match Local.timestamp_millis_opt(epoch_ms).single() {
        Some(dt) => dt.format(TimeUtils::STANDARD_DATE_FORMAT).to_string(),
        None => "????-??-??".to_string(),
    }
}

/// Minutes since local midnight, truncated to the whole minute.
/// This is the broadcast key for cross-chart cursor sync: same wall-clock
/// minute on every displayed day, whatever its date.
pub fn minutes_of_day(epoch_ms: i64) -> Option<u32> {
    let dt: DateTime<Local> = Local.timestamp_millis_opt(epoch_ms).single()?;
    Some(dt.hour() * 60 + dt.minute())
}

pub fn format_duration(ms: i64) -> String {
    let secs = ms / 1000;
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }
    let days = hours / 24;
    format!("{}d", days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_formatting_picks_coarsest_unit() {
        assert_eq!(format_duration(45 * 1000), "45s");
        assert_eq!(format_duration(5 * TimeUtils::MS_IN_MIN), "5m");
        assert_eq!(format_duration(3 * TimeUtils::MS_IN_H), "3h");
        assert_eq!(format_duration(9 * TimeUtils::MS_IN_D), "9d");
    }
}

use chrono::{Days, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::utils::TimeUtils;

/// Comparable calendar-date key, local timezone.
///
/// All bucketing and cursor mapping goes through this type so the local-time
/// policy lives in exactly one place. Never persisted - recomputed from the
/// sample timestamps on every refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Local calendar date of an epoch-millis instant.
    pub fn from_timestamp_ms(epoch_ms: i64) -> Option<Self> {
        let dt = Local.timestamp_millis_opt(epoch_ms).single()?;
        Some(Self(dt.date_naive()))
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    pub fn minus_days(self, n: u64) -> Self {
        Self(self.0 - Days::new(n))
    }

    /// Epoch millis of `hour:minute` local time on this day.
    ///
    /// DST-ambiguous wall-clock times resolve to the earlier instant; times
    /// that fall in a spring-forward gap anchor on the UTC reading.
    pub fn instant_at(self, hour: u32, minute: u32) -> i64 {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
        let naive = self.0.and_time(time);
        match naive.and_local_timezone(Local) {
            LocalResult::Single(dt) => dt.timestamp_millis(),
            LocalResult::Ambiguous(earlier, _) => earlier.timestamp_millis(),
            LocalResult::None => Utc.from_utc_datetime(&naive).timestamp_millis(),
        }
    }

    /// Epoch millis of `minutes` past local midnight on this day.
    pub fn instant_at_minutes(self, minutes: u32) -> i64 {
        self.instant_at(minutes / 60, minutes % 60)
    }

    pub fn label(self) -> String {
        self.0.format(TimeUtils::STANDARD_DATE_FORMAT).to_string()
    }

    /// Short label for chart headings, e.g. `Fri 07 Aug`.
    pub fn heading(self) -> String {
        self.0.format("%a %d %b").to_string()
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> DayKey {
        DayKey::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn ordering_follows_calendar() {
        assert!(day(2026, 8, 6) < day(2026, 8, 7));
        assert!(day(2025, 12, 31) < day(2026, 1, 1));
    }

    #[test]
    fn minus_days_crosses_month_boundary() {
        assert_eq!(day(2026, 8, 2).minus_days(3), day(2026, 7, 30));
    }

    #[test]
    fn instant_roundtrips_through_day_key() {
        let d = day(2026, 8, 7);
        let ten_thirty = d.instant_at(10, 30);
        assert_eq!(DayKey::from_timestamp_ms(ten_thirty), Some(d));
        assert_eq!(
            crate::utils::time_utils::minutes_of_day(ten_thirty),
            Some(10 * 60 + 30)
        );
    }

    #[test]
    fn instant_at_minutes_matches_hour_minute_split() {
        let d = day(2026, 8, 7);
        assert_eq!(d.instant_at_minutes(14 * 60 + 45), d.instant_at(14, 45));
    }
}

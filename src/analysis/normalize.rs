use crate::config::DayHours;
use crate::domain::{DayKey, Sample};

/// One axis-aligned point of a normalized day series.
///
/// Null readings map to 0.0 at this boundary - visual continuity wins over
/// strict missing-data semantics, by decision, not accident. Peaks are
/// computed from the raw bucket and never see these zeros.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub timestamp_ms: i64,
    pub lead: f64,
    pub boulder: f64,
}

/// A single day's series anchored to its operating-hours window.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDaySeries {
    pub day: DayKey,
    pub points: Vec<SeriesPoint>,
    pub open_ms: i64,
    pub close_ms: i64,
}

impl NormalizedDaySeries {
    /// X-axis clamp bounds: the chart spans operating hours regardless of
    /// how sparse the real samples are.
    pub fn min_time(&self) -> i64 {
        self.open_ms
    }

    pub fn max_time(&self) -> i64 {
        self.close_ms
    }
}

/// Synthesize boundary points for one day's bucket.
///
/// The poller is interval-based and never samples opening or closing time
/// directly, so the boundaries are reconstructed:
/// - a leading `(open, 0, 0)` when the bucket is empty or starts after open;
/// - a trailing `(close, 0, 0)` only once the day is actually over (a past
///   day, or today at-or-after closing). A live in-progress day must never
///   show a false "closed" drop.
pub fn normalize_day(
    bucket: &[Sample],
    day: DayKey,
    hours: DayHours,
    now_ms: i64,
) -> NormalizedDaySeries {
    let open_ms = hours.open_ms(day);
    let close_ms = hours.close_ms(day);

    let mut points: Vec<SeriesPoint> = Vec::with_capacity(bucket.len() + 2);

    if bucket.first().is_none_or(|s| s.timestamp_ms > open_ms) {
        points.push(SeriesPoint {
            timestamp_ms: open_ms,
            lead: 0.0,
            boulder: 0.0,
        });
    }

    points.extend(bucket.iter().map(|s| SeriesPoint {
        timestamp_ms: s.timestamp_ms,
        lead: s.lead.map_or(0.0, |p| p.as_f64()),
        boulder: s.boulder.map_or(0.0, |p| p.as_f64()),
    }));

    let today = DayKey::from_timestamp_ms(now_ms);
    let day_is_past = today.is_some_and(|t| day < t);
    let closed_now = today == Some(day) && now_ms >= close_ms;
    let last_before_close = points.last().is_none_or(|p| p.timestamp_ms < close_ms);

    if (day_is_past || closed_now) && last_before_close {
        points.push(SeriesPoint {
            timestamp_ms: close_ms,
            lead: 0.0,
            boulder: 0.0,
        });
    }

    NormalizedDaySeries {
        day,
        points,
        open_ms,
        close_ms,
    }
}

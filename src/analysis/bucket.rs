use std::collections::BTreeMap;

use itertools::Itertools;

use crate::domain::{DayKey, Sample};

/// Group samples by local calendar day.
///
/// The feed is already time-ordered, but this must not be relied on:
/// a defensive stable sort keeps within-day order correct (and preserves
/// original order on equal timestamps) even if the collector ever emits
/// out of order.
pub fn bucket_by_day(samples: &[Sample]) -> BTreeMap<DayKey, Vec<Sample>> {
    let mut sorted: Vec<Sample> = samples.to_vec();
    sorted.sort_by_key(|s| s.timestamp_ms);

    let groups = sorted
        .into_iter()
        .filter_map(|s| match DayKey::from_timestamp_ms(s.timestamp_ms) {
            Some(day) => Some((day, s)),
            None => {
                log::warn!("dropping sample with out-of-range timestamp {}", s.timestamp_ms);
                None
            }
        })
        .chunk_by(|(day, _)| *day);

    let mut buckets: BTreeMap<DayKey, Vec<Sample>> = BTreeMap::new();
    for (day, group) in &groups {
        buckets
            .entry(day)
            .or_default()
            .extend(group.map(|(_, s)| s));
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Percent;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> DayKey {
        DayKey::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn sample(ts: i64, lead: u8) -> Sample {
        Sample::new(ts, Some(Percent::new(lead)), None, None)
    }

    #[test]
    fn groups_by_local_date() {
        let d1 = day(2026, 8, 6);
        let d2 = day(2026, 8, 7);
        let samples = vec![
            sample(d1.instant_at(10, 0), 10),
            sample(d1.instant_at(18, 0), 20),
            sample(d2.instant_at(9, 30), 30),
        ];

        let buckets = bucket_by_day(&samples);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[&d1].len(), 2);
        assert_eq!(buckets[&d2].len(), 1);
        assert_eq!(buckets[&d2][0].lead, Some(Percent::new(30)));
    }

    #[test]
    fn sorts_defensively_before_grouping() {
        let d = day(2026, 8, 7);
        let samples = vec![
            sample(d.instant_at(15, 0), 2),
            sample(d.instant_at(10, 0), 1),
            sample(d.instant_at(20, 0), 3),
        ];

        let buckets = bucket_by_day(&samples);
        let times: Vec<i64> = buckets[&d].iter().map(|s| s.timestamp_ms).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn keys_iterate_in_calendar_order() {
        let d1 = day(2026, 8, 5);
        let d2 = day(2026, 8, 7);
        let samples = vec![sample(d2.instant_at(12, 0), 1), sample(d1.instant_at(12, 0), 1)];

        let buckets = bucket_by_day(&samples);
        let keys: Vec<DayKey> = buckets.keys().copied().collect();
        assert_eq!(keys, vec![d1, d2]);
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        assert!(bucket_by_day(&[]).is_empty());
    }
}

//! View Selector: materializes the layout for the selected range mode from
//! the bucketed samples. Owns the chart registry contents - every build
//! starts from a clean cursor slate.

use std::collections::BTreeMap;

use anyhow::{Result, anyhow};

use crate::analysis::{
    DailyPeak, NormalizedDaySeries, bucket_by_day, daily_peaks, normalize_day,
};
use crate::config::{OperatingHours, RangeMode};
use crate::domain::{DayKey, Sample};
use crate::sync::{ChartId, ChartRegistry};

/// Everything a rendered day chart needs: the normalized series, the day's
/// peaks, and its registry handle for cursor sync.
pub struct DayChartSpec {
    pub chart_id: ChartId,
    pub day: DayKey,
    pub series: NormalizedDaySeries,
    pub peaks: DailyPeak,
}

/// One category of the peak summary chart.
pub struct PeakBarRow {
    pub day: DayKey,
    pub peaks: DailyPeak,
}

pub enum DashboardView {
    /// One normalized chart per day, oldest to newest.
    DayGrid(Vec<DayChartSpec>),
    /// Peak summary bars with an optional drill-down chart below.
    PeakBars {
        rows: Vec<PeakBarRow>,
        drilldown: Option<DayChartSpec>,
    },
}

impl DashboardView {
    /// Render a single-day chart for a clicked bar, replacing any prior
    /// drill-down (whose registry entry is removed with it).
    pub fn open_drilldown(
        &mut self,
        day: DayKey,
        samples: &[Sample],
        hours: &OperatingHours,
        registry: &mut ChartRegistry,
        now_ms: i64,
    ) {
        let DashboardView::PeakBars { drilldown, .. } = self else {
            return;
        };
        if let Some(old) = drilldown.take() {
            registry.remove(old.chart_id);
        }
        let buckets = bucket_by_day(samples);
        *drilldown = Some(build_day_chart(day, &buckets, hours, registry, now_ms));
    }
}

/// Materialize the layout for `mode`.
///
/// Clears the registry first: a mode switch or data refresh tears down all
/// chart instances and their cursor state before the new set is built.
pub fn build_view(
    mode: RangeMode,
    samples: &[Sample],
    hours: &OperatingHours,
    registry: &mut ChartRegistry,
    now_ms: i64,
) -> Result<DashboardView> {
    registry.clear();

    let today = DayKey::from_timestamp_ms(now_ms)
        .ok_or_else(|| anyhow!("current time is outside the calendar range"))?;
    let buckets = bucket_by_day(samples);
    let window = day_window(today, mode.day_span());

    if mode.is_peak_bar() {
        let rows = window
            .into_iter()
            .map(|day| PeakBarRow {
                day,
                peaks: buckets
                    .get(&day)
                    .map(|b| daily_peaks(b))
                    .unwrap_or_default(),
            })
            .collect();
        Ok(DashboardView::PeakBars {
            rows,
            drilldown: None,
        })
    } else {
        let charts = window
            .into_iter()
            .map(|day| build_day_chart(day, &buckets, hours, registry, now_ms))
            .collect();
        Ok(DashboardView::DayGrid(charts))
    }
}

/// Today plus span-1 prior days, oldest to newest.
fn day_window(today: DayKey, span: u64) -> Vec<DayKey> {
    (0..span).rev().map(|back| today.minus_days(back)).collect()
}

fn build_day_chart(
    day: DayKey,
    buckets: &BTreeMap<DayKey, Vec<Sample>>,
    hours: &OperatingHours,
    registry: &mut ChartRegistry,
    now_ms: i64,
) -> DayChartSpec {
    let bucket = buckets.get(&day).map_or(&[][..], |v| v.as_slice());
    let series = normalize_day(bucket, day, hours.for_day(day), now_ms);
    let peaks = daily_peaks(bucket);
    let chart_id = registry.register(day, series.min_time(), series.max_time());
    DayChartSpec {
        chart_id,
        day,
        series,
        peaks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HOURS;
    use crate::domain::Percent;

    fn now_ms() -> i64 {
        // Midday today, local: the current day is live and mid-window
        DayKey::from_timestamp_ms(crate::utils::time_utils::local_now_as_timestamp_ms())
            .map(|d| d.instant_at(12, 0))
            .unwrap_or(0)
    }

    fn sample_at(day: DayKey, hour: u32, lead: u8) -> Sample {
        Sample::new(day.instant_at(hour, 0), Some(Percent::new(lead)), None, None)
    }

    #[test]
    fn grid_modes_build_one_chart_per_day_oldest_first() {
        let now = now_ms();
        let today = DayKey::from_timestamp_ms(now).unwrap();
        let mut reg = ChartRegistry::new();

        let view = build_view(RangeMode::TwoDay, &[], &HOURS, &mut reg, now).unwrap();
        let DashboardView::DayGrid(charts) = view else {
            panic!("expected day grid");
        };
        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].day, today.minus_days(1));
        assert_eq!(charts[1].day, today);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn rebuild_clears_previous_registry_entries() {
        let now = now_ms();
        let mut reg = ChartRegistry::new();

        build_view(RangeMode::SevenDayGrid, &[], &HOURS, &mut reg, now).unwrap();
        assert_eq!(reg.len(), 7);

        build_view(RangeMode::OneDay, &[], &HOURS, &mut reg, now).unwrap();
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn peak_modes_have_no_synced_day_charts() {
        let now = now_ms();
        let mut reg = ChartRegistry::new();

        let view = build_view(RangeMode::PeakWeek, &[], &HOURS, &mut reg, now).unwrap();
        let DashboardView::PeakBars { rows, drilldown } = view else {
            panic!("expected peak bars");
        };
        assert_eq!(rows.len(), 7);
        assert!(drilldown.is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn peak_rows_pick_up_bucketed_maxima() {
        let now = now_ms();
        let today = DayKey::from_timestamp_ms(now).unwrap();
        let yesterday = today.minus_days(1);
        let samples = vec![
            sample_at(yesterday, 10, 35),
            sample_at(yesterday, 18, 62),
            sample_at(today, 11, 40),
        ];

        let mut reg = ChartRegistry::new();
        let view = build_view(RangeMode::PeakWeek, &samples, &HOURS, &mut reg, now).unwrap();
        let DashboardView::PeakBars { rows, .. } = view else {
            panic!("expected peak bars");
        };

        let y_row = rows.iter().find(|r| r.day == yesterday).unwrap();
        assert_eq!(y_row.peaks.max_lead.unwrap().value, Percent::new(62));
        // Days with no samples render as empty categories, not errors
        assert!(rows.iter().any(|r| r.peaks.is_empty()));
    }

    #[test]
    fn drilldown_replaces_the_previous_one() {
        let now = now_ms();
        let today = DayKey::from_timestamp_ms(now).unwrap();
        let mut reg = ChartRegistry::new();

        let mut view = build_view(RangeMode::PeakWeek, &[], &HOURS, &mut reg, now).unwrap();
        view.open_drilldown(today.minus_days(2), &[], &HOURS, &mut reg, now);
        assert_eq!(reg.len(), 1);

        view.open_drilldown(today.minus_days(3), &[], &HOURS, &mut reg, now);
        let DashboardView::PeakBars { drilldown, .. } = &view else {
            panic!("expected peak bars");
        };
        assert_eq!(drilldown.as_ref().unwrap().day, today.minus_days(3));
        // Old drill-down chart left the registry with its replacement
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn zero_samples_still_build_a_renderable_view() {
        let now = now_ms();
        let mut reg = ChartRegistry::new();
        let view = build_view(RangeMode::OneDay, &[], &HOURS, &mut reg, now).unwrap();
        let DashboardView::DayGrid(charts) = view else {
            panic!("expected day grid");
        };
        // Normalizer synthesizes the open boundary even with no data
        assert!(!charts[0].series.points.is_empty());
    }
}

use crate::domain::{Percent, Sample};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakValue {
    pub value: Percent,
    pub timestamp_ms: i64,
}

/// Highest qualifying reading per series for one day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DailyPeak {
    pub max_lead: Option<PeakValue>,
    pub max_boulder: Option<PeakValue>,
}

impl DailyPeak {
    pub fn is_empty(&self) -> bool {
        self.max_lead.is_none() && self.max_boulder.is_none()
    }
}

/// Peaks come from the RAW bucket, never the normalized series: the
/// normalizer's synthesized zeros must not qualify. Zero and null readings
/// mean "closed or unknown" and are excluded entirely, which also means an
/// all-zero day and a no-data day both come out as None.
pub fn daily_peaks(bucket: &[Sample]) -> DailyPeak {
    DailyPeak {
        max_lead: peak_of(bucket, |s| s.lead),
        max_boulder: peak_of(bucket, |s| s.boulder),
    }
}

fn peak_of(bucket: &[Sample], series: impl Fn(&Sample) -> Option<Percent>) -> Option<PeakValue> {
    bucket.iter().fold(None, |best, s| {
        let Some(v) = series(s) else { return best };
        if v.value() == 0 {
            return best;
        }
        match best {
            // Strict > replaces, so the first occurrence wins a tie
            Some(b) if v <= b.value => best,
            _ => Some(PeakValue {
                value: v,
                timestamp_ms: s.timestamp_ms,
            }),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ts: i64, lead: Option<u8>, boulder: Option<u8>) -> Sample {
        Sample::new(ts, lead.map(Percent::new), boulder.map(Percent::new), None)
    }

    #[test]
    fn zeros_and_nulls_do_not_qualify() {
        let bucket = vec![
            sample(1, Some(0), None),
            sample(2, Some(45), None),
            sample(3, Some(0), None),
        ];
        let peaks = daily_peaks(&bucket);
        let lead = peaks.max_lead.unwrap();
        assert_eq!(lead.value, Percent::new(45));
        assert_eq!(lead.timestamp_ms, 2);
        assert_eq!(peaks.max_boulder, None);
    }

    #[test]
    fn all_zero_series_yields_none() {
        let bucket = vec![sample(1, Some(0), Some(0)), sample(2, Some(0), Some(0))];
        assert!(daily_peaks(&bucket).is_empty());
    }

    #[test]
    fn tie_break_keeps_the_first_occurrence() {
        let bucket = vec![sample(100, Some(50), None), sample(200, Some(50), None)];
        let lead = daily_peaks(&bucket).max_lead.unwrap();
        assert_eq!(lead.timestamp_ms, 100);
    }

    #[test]
    fn series_are_independent() {
        let bucket = vec![
            sample(1, Some(30), Some(80)),
            sample(2, Some(70), Some(10)),
        ];
        let peaks = daily_peaks(&bucket);
        assert_eq!(peaks.max_lead.unwrap().timestamp_ms, 2);
        assert_eq!(peaks.max_boulder.unwrap().timestamp_ms, 1);
    }

    #[test]
    fn end_to_end_single_day_scenario() {
        // Boundary zeros are real samples here, still excluded from peaks
        let bucket = vec![
            sample(900, Some(0), Some(0)),
            sample(1000, Some(40), Some(60)),
            sample(2200, Some(0), Some(0)),
        ];
        let peaks = daily_peaks(&bucket);
        let lead = peaks.max_lead.unwrap();
        let boulder = peaks.max_boulder.unwrap();
        assert_eq!((lead.value, lead.timestamp_ms), (Percent::new(40), 1000));
        assert_eq!((boulder.value, boulder.timestamp_ms), (Percent::new(60), 1000));
    }
}

use std::sync::Arc;

use crate::domain::Sample;
use crate::utils::TimeUtils;

/// Rolling in-memory store of occupancy samples.
///
/// The collector is the single writer; this side only installs whole
/// snapshots. Readers clone the `Arc`, so a refresh never mutates a series
/// a chart is currently drawn from.
pub struct SampleStore {
    snapshot: Arc<Vec<Sample>>,
    retention_days: i64,
}

impl SampleStore {
    pub fn new(retention_days: i64) -> Self {
        Self {
            snapshot: Arc::new(Vec::new()),
            retention_days,
        }
    }

    pub fn snapshot(&self) -> Arc<Vec<Sample>> {
        Arc::clone(&self.snapshot)
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Newest sample in the current snapshot, if any.
    pub fn latest(&self) -> Option<&Sample> {
        self.snapshot.last()
    }

    /// Replace the snapshot wholesale, dropping samples older than the
    /// retention window. Relative order of survivors is preserved.
    pub fn install(&mut self, samples: Vec<Sample>, now_ms: i64) {
        let cutoff = now_ms - self.retention_days * TimeUtils::MS_IN_D;
        let pruned: Vec<Sample> = samples
            .into_iter()
            .filter(|s| s.timestamp_ms >= cutoff)
            .collect();
        self.snapshot = Arc::new(pruned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Percent;

    fn sample(ts: i64, lead: u8) -> Sample {
        Sample::new(ts, Some(Percent::new(lead)), None, None)
    }

    #[test]
    fn install_prunes_exactly_the_out_of_retention_samples() {
        let now = 100 * TimeUtils::MS_IN_D;
        let two_days_ago = now - 2 * TimeUtils::MS_IN_D;
        let eight_days_ago = now - 8 * TimeUtils::MS_IN_D;

        let mut store = SampleStore::new(7);
        store.install(
            vec![sample(eight_days_ago, 1), sample(two_days_ago, 2), sample(now, 3)],
            now,
        );

        let snap = store.snapshot();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[0].timestamp_ms, two_days_ago);
        assert_eq!(snap[1].timestamp_ms, now);
    }

    #[test]
    fn old_snapshot_survives_a_replacement() {
        let mut store = SampleStore::new(7);
        store.install(vec![sample(1000, 5)], 2000);
        let before = store.snapshot();

        store.install(vec![sample(3000, 9)], 4000);

        // Reader's Arc still sees the pre-refresh data
        assert_eq!(before[0].timestamp_ms, 1000);
        assert_eq!(store.latest().unwrap().timestamp_ms, 3000);
    }

    #[test]
    fn empty_install_yields_empty_store() {
        let mut store = SampleStore::new(7);
        store.install(Vec::new(), 0);
        assert!(store.is_empty());
        assert!(store.latest().is_none());
    }
}

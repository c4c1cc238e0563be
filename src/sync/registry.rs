use crate::domain::DayKey;

/// Opaque handle to a registered chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartId(usize);

/// Per-chart cursor state machine: Idle <-> Active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorState {
    #[default]
    Idle,
    Active {
        query_time_ms: i64,
    },
}

impl CursorState {
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub fn query_time_ms(self) -> Option<i64> {
        match self {
            Self::Active { query_time_ms } => Some(query_time_ms),
            Self::Idle => None,
        }
    }
}

pub struct ChartEntry {
    pub id: ChartId,
    pub day: DayKey,
    /// Axis clamp bounds of the chart (operating-hours window).
    pub min_ms: i64,
    pub max_ms: i64,
    pub cursor: CursorState,
}

/// Explicit registry of live chart instances.
///
/// Owned by the view layer and passed to the synchronizer - charts are
/// added on build and dropped on teardown, so cursor lifecycle is testable
/// without any rendering backend and no process-global list exists.
#[derive(Default)]
pub struct ChartRegistry {
    next_id: usize,
    entries: Vec<ChartEntry>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, day: DayKey, min_ms: i64, max_ms: i64) -> ChartId {
        let id = ChartId(self.next_id);
        self.next_id += 1;
        self.entries.push(ChartEntry {
            id,
            day,
            min_ms,
            max_ms,
            cursor: CursorState::Idle,
        });
        id
    }

    pub fn remove(&mut self, id: ChartId) {
        self.entries.retain(|e| e.id != id);
    }

    /// Teardown: all entries and their cursor state go together. Called on
    /// every mode switch and data refresh so no stale overlay leaks into
    /// the next chart set.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: ChartId) -> Option<&ChartEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn cursor(&self, id: ChartId) -> CursorState {
        self.get(id).map(|e| e.cursor).unwrap_or_default()
    }

    pub fn entries(&self) -> impl Iterator<Item = &ChartEntry> {
        self.entries.iter()
    }

    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = &mut ChartEntry> {
        self.entries.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> DayKey {
        DayKey::new(NaiveDate::from_ymd_opt(2026, 8, d).unwrap())
    }

    #[test]
    fn register_hands_out_distinct_ids() {
        let mut reg = ChartRegistry::new();
        let a = reg.register(day(1), 0, 100);
        let b = reg.register(day(2), 0, 100);
        assert_ne!(a, b);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn clear_drops_entries_and_cursor_state() {
        let mut reg = ChartRegistry::new();
        let a = reg.register(day(1), 0, 100);
        if let Some(e) = reg.entries_mut().next() {
            e.cursor = CursorState::Active { query_time_ms: 50 };
        }
        reg.clear();
        assert!(reg.is_empty());
        // A stale id resolves to Idle, never to the old Active state
        assert_eq!(reg.cursor(a), CursorState::Idle);
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut reg = ChartRegistry::new();
        let a = reg.register(day(1), 0, 100);
        reg.clear();
        let b = reg.register(day(1), 0, 100);
        assert_ne!(a, b);
    }

    #[test]
    fn remove_only_touches_the_given_chart() {
        let mut reg = ChartRegistry::new();
        let a = reg.register(day(1), 0, 100);
        let b = reg.register(day(2), 0, 100);
        reg.remove(a);
        assert!(reg.get(a).is_none());
        assert!(reg.get(b).is_some());
    }
}

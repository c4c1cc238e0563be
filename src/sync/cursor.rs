use crate::sync::registry::{ChartId, ChartRegistry, CursorState};
use crate::utils::time_utils::minutes_of_day;

/// Propagate a pointer position on `source` to every registered chart.
///
/// The broadcast key is local time-of-day (hour:minute, date discarded):
/// hovering 10:30 on today's chart highlights 10:30 on every other visible
/// day, whatever its date. Peers whose axis bounds don't contain the mapped
/// instant (half days, shortened holiday hours) go Idle instead.
///
/// The whole registry is updated before this returns, so no two charts can
/// be observed with inconsistent cursor state within a frame. Returns true
/// when any state changed (callers use it to request a repaint).
pub fn pointer_move(registry: &mut ChartRegistry, source: ChartId, query_time_ms: i64) -> bool {
    let Some(minutes) = minutes_of_day(query_time_ms) else {
        return false;
    };

    let mut changed = false;
    for entry in registry.entries_mut() {
        let next = if entry.id == source {
            CursorState::Active { query_time_ms }
        } else {
            let mapped = entry.day.instant_at_minutes(minutes);
            if mapped >= entry.min_ms && mapped <= entry.max_ms {
                CursorState::Active {
                    query_time_ms: mapped,
                }
            } else {
                CursorState::Idle
            }
        };
        if entry.cursor != next {
            entry.cursor = next;
            changed = true;
        }
    }
    changed
}

/// Pointer left the source chart: every cursor clears, peers included.
pub fn pointer_leave(registry: &mut ChartRegistry) -> bool {
    let mut changed = false;
    for entry in registry.entries_mut() {
        if entry.cursor != CursorState::Idle {
            entry.cursor = CursorState::Idle;
            changed = true;
        }
    }
    changed
}

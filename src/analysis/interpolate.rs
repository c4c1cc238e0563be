use crate::analysis::normalize::NormalizedDaySeries;

/// Interpolated series values at a cursor instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorValues {
    pub lead: f64,
    pub boulder: f64,
}

/// Linear interpolation of both series at `query_ms`.
///
/// Returns None outside the series' observed span - the cursor shows
/// nothing rather than extrapolating. Linear scan is fine here: one day of
/// 5-minute samples tops out around 300 points.
pub fn interpolate(series: &NormalizedDaySeries, query_ms: i64) -> Option<CursorValues> {
    let points = &series.points;
    let first = points.first()?;
    let last = points.last()?;
    if query_ms < first.timestamp_ms || query_ms > last.timestamp_ms {
        return None;
    }

    if points.len() == 1 {
        // Bounds check above already pinned query_ms to the single point
        return Some(CursorValues {
            lead: first.lead,
            boulder: first.boulder,
        });
    }

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if query_ms < a.timestamp_ms || query_ms > b.timestamp_ms {
            continue;
        }
        let span = b.timestamp_ms - a.timestamp_ms;
        let factor = if span == 0 {
            0.0
        } else {
            (query_ms - a.timestamp_ms) as f64 / span as f64
        };
        return Some(CursorValues {
            lead: a.lead + (b.lead - a.lead) * factor,
            boulder: a.boulder + (b.boulder - a.boulder) * factor,
        });
    }

    None
}

//! The time-series engine: day bucketing, boundary normalization, peak
//! extraction and cursor interpolation. Pure computation, no rendering.

mod bucket;
mod interpolate;
mod normalize;
mod peaks;

pub use bucket::bucket_by_day;
pub use interpolate::{CursorValues, interpolate};
pub use normalize::{NormalizedDaySeries, SeriesPoint, normalize_day};
pub use peaks::{DailyPeak, PeakValue, daily_peaks};

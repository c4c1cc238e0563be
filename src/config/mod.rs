//! Configuration module for the dashboard.

mod collector;
mod hours;
mod types;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use collector::{COLLECTOR, CollectorConfig};
pub use hours::{DayHours, HOURS, HoursException, OperatingHours};
pub use types::RangeMode;

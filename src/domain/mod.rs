mod day_key;
mod percent;
mod sample;

pub use day_key::DayKey;
pub use percent::Percent;
pub use sample::{CollectorStatus, Sample, derive_overall};

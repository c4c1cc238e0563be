//! Range-selector modes

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Default)]
pub enum RangeMode {
    #[default]
    OneDay,
    TwoDay,
    SevenDayGrid,
    PeakWeek,
    PeakMonth,
}

impl RangeMode {
    /// Stable identifier, also the button label in the range selector.
    pub fn id(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::TwoDay => "2d",
            Self::SevenDayGrid => "7d",
            Self::PeakWeek => "peak-week",
            Self::PeakMonth => "peak-month",
        }
    }

    /// Calendar days covered: today plus N-1 prior days.
    pub fn day_span(self) -> u64 {
        match self {
            Self::OneDay => 1,
            Self::TwoDay => 2,
            Self::SevenDayGrid => 7,
            Self::PeakWeek => 7,
            Self::PeakMonth => 30,
        }
    }

    pub fn is_peak_bar(self) -> bool {
        matches!(self, Self::PeakWeek | Self::PeakMonth)
    }
}

impl std::fmt::Display for RangeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

//! Gym operating hours. The polling never samples the boundaries directly,
//! so the normalizer anchors every day's series to these.

use chrono::Datelike;

use crate::domain::DayKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHours {
    pub open_hour: u32,
    pub close_hour: u32,
}

impl DayHours {
    pub fn open_ms(self, day: DayKey) -> i64 {
        day.instant_at(self.open_hour, 0)
    }

    pub fn close_ms(self, day: DayKey) -> i64 {
        day.instant_at(self.close_hour, 0)
    }
}

/// Date-keyed override, e.g. holiday half days.
pub struct HoursException {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hours: DayHours,
}

pub struct OperatingHours {
    pub regular: DayHours,
    pub exceptions: &'static [HoursException],
}

impl OperatingHours {
    pub fn for_day(&self, day: DayKey) -> DayHours {
        let date = day.date();
        self.exceptions
            .iter()
            .find(|ex| {
                ex.year == date.year() && ex.month == date.month() && ex.day == date.day()
            })
            .map(|ex| ex.hours)
            .unwrap_or(self.regular)
    }
}

pub const HOURS: OperatingHours = OperatingHours {
    regular: DayHours {
        open_hour: 9,
        close_hour: 22,
    },
    exceptions: &[
        // Christmas Eve / New Year's Eve short days
        HoursException {
            year: 2026,
            month: 12,
            day: 24,
            hours: DayHours {
                open_hour: 9,
                close_hour: 14,
            },
        },
        HoursException {
            year: 2026,
            month: 12,
            day: 31,
            hours: DayHours {
                open_hour: 9,
                close_hour: 16,
            },
        },
    ],
};

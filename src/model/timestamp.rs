use std::fmt;

use serde::{Deserialize, Serialize};

const YEAR_BITS: u32 = 18;
const HOUR_BITS: u32 = 5;
const DAY_BITS: u32 = 9;
const DAY_SHIFT: u32 = HOUR_BITS;
const YEAR_SHIFT: u32 = HOUR_BITS + DAY_BITS;

const HOUR_MASK: u32 = (1 << HOUR_BITS) - 1;
const DAY_MASK: u32 = (1 << DAY_BITS) - 1;

pub const DAYS_PER_YEAR: u32 = 360;
pub const HOURS_PER_DAY: u32 = 24;
/// Largest year the packed layout can hold.
pub const MAX_YEAR: u32 = (1 << YEAR_BITS) - 1;

/// Point on the promotion calendar: year, day-of-year and hour packed in one `u32`.
///
/// Bit layout: `[year:18][day_of_year:9][hour:5]`. Natural `u32` ordering equals
/// chronological ordering, which lets Postgres store it as a plain integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "TimestampRepr", from = "TimestampRepr")]
pub struct SimTimestamp(u32);

#[derive(Serialize, Deserialize)]
struct TimestampRepr {
    year: u32,
    day: u32,
    hour: u32,
}

impl From<SimTimestamp> for TimestampRepr {
    fn from(ts: SimTimestamp) -> Self {
        TimestampRepr {
            year: ts.year(),
            day: ts.day(),
            hour: ts.hour(),
        }
    }
}

impl From<TimestampRepr> for SimTimestamp {
    fn from(repr: TimestampRepr) -> Self {
        SimTimestamp::new(repr.year, repr.day, repr.hour)
    }
}

impl SimTimestamp {
    /// Last representable hour of the calendar.
    pub const MAX: SimTimestamp = SimTimestamp(
        (MAX_YEAR << YEAR_SHIFT) | (DAYS_PER_YEAR << DAY_SHIFT) | (HOURS_PER_DAY - 1),
    );

    /// Create a timestamp from year (0–`MAX_YEAR`), day-of-year (1–360), and hour (0–23).
    pub fn new(year: u32, day: u32, hour: u32) -> Self {
        assert!(year <= MAX_YEAR, "year out of range: {year}");
        assert!(
            (1..=DAYS_PER_YEAR).contains(&day),
            "day out of range: {day}"
        );
        assert!(hour < HOURS_PER_DAY, "hour out of range: {hour}");
        Self((year << YEAR_SHIFT) | (day << DAY_SHIFT) | hour)
    }

    pub fn from_year(year: u32) -> Self {
        Self::new(year, 1, 0)
    }

    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn year(self) -> u32 {
        self.0 >> YEAR_SHIFT
    }

    pub fn day(self) -> u32 {
        (self.0 >> DAY_SHIFT) & DAY_MASK
    }

    pub fn hour(self) -> u32 {
        self.0 & HOUR_MASK
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Same hour, `days` calendar days later. Rolls over into following years
    /// and saturates at [`SimTimestamp::MAX`].
    pub fn plus_days(self, days: u32) -> Self {
        let day_index = u64::from(self.day() - 1) + u64::from(days);
        let year = u64::from(self.year()) + day_index / u64::from(DAYS_PER_YEAR);
        if year > u64::from(MAX_YEAR) {
            return Self::MAX;
        }
        let day = (day_index % u64::from(DAYS_PER_YEAR)) as u32 + 1;
        Self::new(year as u32, day, self.hour())
    }

    /// `hours` later, carrying into days and years. Saturates at [`SimTimestamp::MAX`].
    pub fn plus_hours(self, hours: u32) -> Self {
        let hour_index = u64::from(self.hour()) + u64::from(hours);
        let days = hour_index / u64::from(HOURS_PER_DAY);
        let Ok(days) = u32::try_from(days) else {
            return Self::MAX;
        };
        let later = self.plus_days(days);
        if later == Self::MAX {
            return Self::MAX;
        }
        let hour = (hour_index % u64::from(HOURS_PER_DAY)) as u32;
        Self::new(later.year(), later.day(), hour)
    }
}

impl Default for SimTimestamp {
    fn default() -> Self {
        Self::from_year(0)
    }
}

impl fmt::Display for SimTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Y{}.D{}.H{}", self.year(), self.day(), self.hour())
    }
}

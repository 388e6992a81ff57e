//! Calendar vocabulary shared by placements and schedule versions.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Teaching day. There is no Sunday in this domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// All teaching days in calendar order.
    pub const ALL: [DayOfWeek; 6] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Map a chrono weekday onto a teaching day. Sunday has no counterpart.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(Self::Monday),
            Weekday::Tue => Some(Self::Tuesday),
            Weekday::Wed => Some(Self::Wednesday),
            Weekday::Thu => Some(Self::Thursday),
            Weekday::Fri => Some(Self::Friday),
            Weekday::Sat => Some(Self::Saturday),
            Weekday::Sun => None,
        }
    }
}

/// Which weeks of a two-week rotation a placement recurs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekParity {
    Odd,
    Even,
    /// Every week regardless of parity.
    Both,
}

impl WeekParity {
    /// Lowercase name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            WeekParity::Odd => "odd",
            WeekParity::Even => "even",
            WeekParity::Both => "both",
        }
    }

    /// Two parities can collide unless one is `Odd` and the other `Even`.
    pub fn is_compatible_with(self, other: WeekParity) -> bool {
        !matches!(
            (self, other),
            (WeekParity::Odd, WeekParity::Even) | (WeekParity::Even, WeekParity::Odd)
        )
    }

    /// The other half of the rotation. `Both` maps to itself.
    pub fn opposite(self) -> WeekParity {
        match self {
            WeekParity::Odd => WeekParity::Even,
            WeekParity::Even => WeekParity::Odd,
            WeekParity::Both => WeekParity::Both,
        }
    }

    /// Whether a placement with this parity takes place in a week of
    /// parity `week`.
    pub fn includes(self, week: WeekParity) -> bool {
        self == WeekParity::Both || week == WeekParity::Both || self == week
    }

    /// Parity of the Monday-based week containing `date`.
    ///
    /// Weeks are counted continuously from 0001-01-01 (a Monday), so
    /// consecutive weeks always alternate, including across years with 53
    /// ISO weeks. The count lines up with ISO week parity for 2025.
    pub fn for_date(date: NaiveDate) -> WeekParity {
        let week_index = i64::from(date.num_days_from_ce() - 1).div_euclid(7);
        if week_index.rem_euclid(2) == 1 {
            WeekParity::Odd
        } else {
            WeekParity::Even
        }
    }
}

impl fmt::Display for WeekParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length of the rotation a schedule version uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeekScheduleType {
    OneWeek,
    TwoWeeks,
}

//! Days of the week.

use std::fmt;

use serde::Serialize;

/// Day of the week, with ISO ordinals Monday = 1 through Sunday = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Weekday {
    /// Monday, ordinal 1.
    Monday = 1,
    /// Tuesday, ordinal 2.
    Tuesday = 2,
    /// Wednesday, ordinal 3.
    Wednesday = 3,
    /// Thursday, ordinal 4.
    Thursday = 4,
    /// Friday, ordinal 5.
    Friday = 5,
    /// Saturday, ordinal 6.
    Saturday = 6,
    /// Sunday, ordinal 7.
    Sunday = 7,
}

impl Weekday {
    /// ISO ordinal, Monday = 1 through Sunday = 7.
    #[must_use]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Converts an ISO ordinal back to a weekday.
    #[must_use]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Column index on a Sunday-first calendar grid, Sunday = 0 through
    /// Saturday = 6.
    #[must_use]
    pub fn sunday_first_index(self) -> u8 {
        self.ordinal() % 7
    }

    /// True for Saturday and Sunday.
    #[must_use]
    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

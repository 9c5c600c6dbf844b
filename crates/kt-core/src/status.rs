//! The tri-state availability status and its click transition.

use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Availability of one member on one date.
///
/// The wire form is the string `"OK"`, the string `"NG"`, or `null`; an
/// absent map entry also reads as [`DayStatus::Unset`]. Tapping a calendar
/// cell advances the status through the fixed cycle
/// unset → OK → NG → unset, see [`DayStatus::cycled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayStatus {
    /// Nothing entered yet, or an entry cleared back to undecided.
    #[default]
    Unset,
    /// Able to work that day.
    Ok,
    /// Not able to work that day.
    Ng,
}

impl DayStatus {
    /// The status after one tap on a calendar cell.
    ///
    /// Three taps always return to the starting state.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            DayStatus::Unset => DayStatus::Ok,
            DayStatus::Ok => DayStatus::Ng,
            DayStatus::Ng => DayStatus::Unset,
        }
    }

    /// Wire representation, `None` for unset.
    #[must_use]
    pub fn as_wire(self) -> Option<&'static str> {
        match self {
            DayStatus::Unset => None,
            DayStatus::Ok => Some("OK"),
            DayStatus::Ng => Some("NG"),
        }
    }

    /// Normalize a wire value.
    ///
    /// `"OK"` and `"NG"` match case-insensitively, mirroring the store
    /// side which upper-cases stored statuses on read. Anything else,
    /// including `None`, reads as unset rather than failing, so one odd
    /// row never poisons a whole fetch.
    #[must_use]
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some(s) if s.eq_ignore_ascii_case("OK") => DayStatus::Ok,
            Some(s) if s.eq_ignore_ascii_case("NG") => DayStatus::Ng,
            _ => DayStatus::Unset,
        }
    }

    /// Cell label on the entry calendar: `"OK"`, `"NG"`, or empty.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.as_wire().unwrap_or("")
    }

    /// True unless the status is [`DayStatus::Unset`].
    #[must_use]
    pub fn is_set(self) -> bool {
        self != DayStatus::Unset
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire().unwrap_or("unset"))
    }
}

impl Serialize for DayStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_wire() {
            Some(s) => serializer.serialize_str(s),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for DayStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(DayStatus::from_wire(value.as_deref()))
    }
}

// ───────────────────────────── Tests ─────────────────────────────

//! Error definitions for the date and calendar layers.
//!
//! All date-domain failures funnel into a single [`enum@Error`]. Store and
//! directory failures have their own types next to the traits that raise
//! them, in `kt-schedule`.

use thiserror::Error;

/// The error type for date construction, parsing, and arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Year outside the supported domain.
    #[error("year {year} out of supported range [1970, 2200]")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },

    /// Month outside `1..=12`.
    #[error("month {month} out of range [1, 12]")]
    MonthOutOfRange {
        /// The rejected month number.
        month: u8,
    },

    /// Day outside the length of the month it was checked against.
    #[error("day {day} out of range [1, {max_day}] for {year}-{month:02}")]
    DayOutOfRange {
        /// The rejected day-of-month.
        day: u8,
        /// The month the day was checked against.
        month: u8,
        /// The year the day was checked against.
        year: u16,
        /// Number of days in that month.
        max_day: u8,
    },

    /// A date string that does not parse as `YYYY-MM-DD`.
    #[error("invalid date string {input:?}, expected YYYY-MM-DD")]
    DateParse {
        /// The offending input.
        input: String,
    },

    /// Day arithmetic produced a serial outside the supported domain.
    #[error("date serial {serial} out of supported range")]
    SerialOutOfRange {
        /// The out-of-range serial number.
        serial: i32,
    },
}

/// Shorthand `Result` used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

// ───────────────────────────── Tests ─────────────────────────────

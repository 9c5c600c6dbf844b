//! # kt-time
//!
//! Calendar dates for the scheduling workspace.
//!
//! [`Date`] is a serial day number relative to 1970-01-01 wrapped in a
//! newtype, which keeps ordering, differences, and day arithmetic cheap
//! while the year/month/day view is computed on demand. [`YearMonth`]
//! carries month arithmetic for window and navigation logic, and [`Clock`]
//! abstracts "today" so window bounds and past-day checks stay testable.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod date;
pub mod weekday;
pub mod year_month;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{days_in_month, is_leap_year, Date, MAX_YEAR, MIN_YEAR};
pub use weekday::Weekday;
pub use year_month::YearMonth;

//! # kt-grid
//!
//! View models for the availability calendars.
//!
//! [`CalendarView`] is what the entry screen renders: the current month
//! plus the two that follow, each as a [`MonthGrid`] of Sunday-first
//! [`DayCell`]s decorated with holiday names, statuses, and past/today
//! flags. [`MonthCursor`] drives the month navigation on the overview
//! screen, clamped to the same span the store accepts. Everything here
//! is pure data; rendering stays in the UI layer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod cursor;
pub mod month;
pub mod view;

pub use cell::{status_glyph, status_title, DayCell};
pub use cursor::MonthCursor;
pub use month::{day_label, MonthGrid, WEEKDAY_HEADERS};
pub use view::{CalendarView, MONTHS_SHOWN};

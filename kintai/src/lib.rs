//! # kintai
//!
//! Work-availability scheduling for contract members: the Japanese
//! national holiday calendar, tri-state availability schedules with
//! their entry-screen state machine, and the calendar view models the
//! UI renders.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `kt-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! kintai = "0.1"
//! ```
//!
//! ```rust
//! use kintai::holiday::HolidayTable;
//! use kintai::time::Date;
//!
//! let table = HolidayTable::for_year(2026).unwrap();
//! let equinox = Date::from_ymd(2026, 3, 20).unwrap();
//! assert_eq!(table.name_of(equinox), Some("春分の日"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Shared vocabulary: errors, day status, member identity.
pub use kt_core as core;

/// Dates, weekdays, months, and clocks.
pub use kt_time as time;

/// Japanese national holidays with substitute-day handling.
pub use kt_holiday as holiday;

/// Availability schedules, store contracts, sessions, and the overview.
pub use kt_schedule as schedule;

/// Calendar grid view models and overview navigation.
pub use kt_grid as grid;

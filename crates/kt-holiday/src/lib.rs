//! # kt-holiday
//!
//! Japanese national holidays, computed per year.
//!
//! A [`HolidayTable`] maps dates to holiday names for one calendar year:
//! the fixed-date holidays, the happy-Monday holidays, the two equinox
//! days, and the substitute days observed when a holiday lands on a
//! Sunday. The calendar grid asks the table for names when it decorates
//! cells.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod japan;

pub use japan::{
    autumnal_equinox_day, vernal_equinox_day, with_substitutes, HolidayTable, SUBSTITUTE_SUFFIX,
};

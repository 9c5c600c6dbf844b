//! # kt-core
//!
//! Shared vocabulary for the kintai workspace.
//!
//! This crate defines the error type used by the date and calendar layers,
//! the tri-state availability status that drives the entry calendar, and the
//! member identity record returned by the directory lookup. Everything else
//! in the workspace builds on these.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod errors;
pub mod member;
pub mod status;

pub use errors::{Error, Result};
pub use member::MemberRef;
pub use status::DayStatus;

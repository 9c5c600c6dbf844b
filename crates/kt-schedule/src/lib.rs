//! # kt-schedule
//!
//! Availability schedules for contract members.
//!
//! The crate has three layers. [`ScheduleMap`] is the pure data model, a
//! date-keyed map of tri-state statuses with the tap-cycle transition.
//! [`WorkSession`] is the interaction state machine the entry UI drives:
//! it opens one member at a time, applies local edits, and exchanges the
//! whole map with a [`ScheduleStore`] in single bulk requests. On top of
//! that, [`monthly_overview`] folds every member's map into the per-day
//! tallies shown on the staff-facing overview.
//!
//! [`MemoryStore`] implements the store contracts in memory with the
//! same acceptance rules as the production backend, so session logic and
//! tests run against realistic semantics without a network.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod memory;
pub mod overview;
pub mod schedule_map;
pub mod session;
pub mod store;
pub mod window;
pub mod wire;

pub use memory::MemoryStore;
pub use overview::{monthly_overview, DayTally, MemberDayStatus, MonthlyOverview, RosterEntry};
pub use schedule_map::ScheduleMap;
pub use session::{SessionError, WorkSession};
pub use store::{LookupError, MemberDirectory, ScheduleStore, StoreError};
pub use window::{retention_cutoff, EntryWindow};

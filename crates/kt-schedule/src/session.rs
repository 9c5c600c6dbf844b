//! The entry-screen interaction state machine.

use thiserror::Error;
use tracing::{debug, warn};

use kt_core::{DayStatus, MemberRef};
use kt_time::{Clock, Date, SystemClock};

use crate::schedule_map::ScheduleMap;
use crate::store::{LookupError, MemberDirectory, ScheduleStore, StoreError};

/// Failure of a session operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No member is open in the session.
    #[error("no member is open")]
    NoMember,

    /// The date lies before today and cannot be edited.
    #[error("{date} is in the past and cannot be edited")]
    PastDate {
        /// The rejected date.
        date: Date,
    },

    /// The store failed or rejected the request.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One member's editing interaction on the entry screen.
///
/// The session owns the working copy of the schedule. Opening a member
/// replaces it with a fresh fetch, taps cycle individual days locally,
/// and a save pushes the whole map back in one request. A fetch failure
/// degrades to an empty schedule so the member can still enter data; a
/// save failure leaves the local edits untouched for a retry.
///
/// The generation counter increments whenever the working copy is
/// replaced wholesale, which lets a caller discard responses of
/// interactions that were reset while a request was in flight.
#[derive(Debug, Clone)]
pub struct WorkSession<C = SystemClock> {
    clock: C,
    member: Option<MemberRef>,
    schedules: ScheduleMap,
    generation: u64,
}

impl Default for WorkSession<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> WorkSession<C> {
    /// A session with no member open.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            member: None,
            schedules: ScheduleMap::new(),
            generation: 0,
        }
    }

    /// The member currently open, if any.
    #[must_use]
    pub fn member(&self) -> Option<&MemberRef> {
        self.member.as_ref()
    }

    /// The working copy of the schedule.
    #[must_use]
    pub fn schedules(&self) -> &ScheduleMap {
        &self.schedules
    }

    /// Status of one day in the working copy.
    #[must_use]
    pub fn status_of(&self, date: Date) -> DayStatus {
        self.schedules.status_of(date)
    }

    /// Today according to the session's clock.
    #[must_use]
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    /// Generation of the current working copy.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Closes any open member and empties the working copy.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.member = None;
        self.schedules.clear();
    }

    /// Opens `member` and replaces the working copy with a fresh fetch.
    ///
    /// A fetch failure is logged and degrades to an empty schedule; the
    /// member stays open either way.
    pub fn open<S: ScheduleStore>(&mut self, store: &S, member: MemberRef) {
        self.generation += 1;
        self.schedules = match store.fetch(member.uuid) {
            Ok(map) => {
                debug!(member = %member.uuid, entries = map.len(), "schedule loaded");
                map
            }
            Err(err) => {
                warn!(member = %member.uuid, error = %err, "schedule fetch failed, starting empty");
                ScheduleMap::new()
            }
        };
        self.member = Some(member);
    }

    /// Resets, resolves `query` through the directory, and opens the
    /// resolved member.
    ///
    /// On a lookup failure the session stays in the cleared state.
    pub fn open_by_query<D, S>(
        &mut self,
        directory: &D,
        store: &S,
        query: &str,
    ) -> Result<(), LookupError>
    where
        D: MemberDirectory,
        S: ScheduleStore,
    {
        self.reset();
        let member = directory.lookup(query)?;
        self.open(store, member);
        Ok(())
    }

    /// Advances one day of the working copy through the tap cycle and
    /// returns the new status.
    ///
    /// Days before today are rejected; the working copy is untouched on
    /// any error.
    pub fn cycle(&mut self, date: Date) -> Result<DayStatus, SessionError> {
        if self.member.is_none() {
            return Err(SessionError::NoMember);
        }
        if date < self.clock.today() {
            return Err(SessionError::PastDate { date });
        }
        Ok(self.schedules.cycle(date))
    }

    /// Pushes the whole working copy to the store in one request.
    ///
    /// The working copy is kept as-is on failure so the member can
    /// retry.
    pub fn save<S: ScheduleStore>(&mut self, store: &mut S) -> Result<(), SessionError> {
        let member = self.member.as_ref().ok_or(SessionError::NoMember)?;
        store.save(member.uuid, &self.schedules)?;
        debug!(
            member = %member.uuid,
            entries = self.schedules.len(),
            generation = self.generation,
            "schedule saved"
        );
        Ok(())
    }
}

// ───────────────────────────── Tests ─────────────────────────────

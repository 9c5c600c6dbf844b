//! In-memory implementation of the store contracts.

use std::collections::BTreeMap;

use tracing::debug;
use uuid::Uuid;

use kt_core::{DayStatus, MemberRef};
use kt_time::Date;

use crate::schedule_map::ScheduleMap;
use crate::store::{LookupError, MemberDirectory, ScheduleStore, StoreError};
use crate::window::{retention_cutoff, EntryWindow};

/// Directory and schedule store backed by plain maps.
///
/// Applies the same acceptance rules as the production backend: lookups
/// try the member number before falling back to a UUID, fetches are
/// restricted to the entry window, and saves silently skip rows dated
/// before today or past the window's end instead of failing the request.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    members: Vec<MemberRef>,
    rows: BTreeMap<(Uuid, Date), DayStatus>,
    today: Date,
}

impl MemoryStore {
    /// An empty store whose window is anchored at `today`.
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self {
            members: Vec::new(),
            rows: BTreeMap::new(),
            today,
        }
    }

    /// Registers a member for lookups.
    pub fn add_member(&mut self, member: MemberRef) {
        self.members.push(member);
    }

    /// Moves the window anchor, as a new day would.
    pub fn set_today(&mut self, today: Date) {
        self.today = today;
    }

    /// The current entry window.
    #[must_use]
    pub fn window(&self) -> EntryWindow {
        EntryWindow::from_today(self.today)
    }

    /// Raw stored status for one row, ignoring the window. Mainly useful
    /// to observe what a save actually persisted.
    #[must_use]
    pub fn stored_status(&self, member: Uuid, date: Date) -> Option<DayStatus> {
        self.rows.get(&(member, date)).copied()
    }

    /// Drops every row dated before the retention cutoff and returns the
    /// number of rows removed.
    pub fn purge_expired(&mut self) -> usize {
        let cutoff = retention_cutoff(self.today);
        let before = self.rows.len();
        self.rows.retain(|(_, date), _| *date >= cutoff);
        let removed = before - self.rows.len();
        if removed > 0 {
            debug!(removed, %cutoff, "purged expired schedule rows");
        }
        removed
    }
}

impl MemberDirectory for MemoryStore {
    fn lookup(&self, query: &str) -> Result<MemberRef, LookupError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        if let Some(member) = self.members.iter().find(|m| m.member_number == query) {
            return Ok(member.clone());
        }
        if let Ok(uuid) = Uuid::parse_str(query) {
            if let Some(member) = self.members.iter().find(|m| m.uuid == uuid) {
                return Ok(member.clone());
            }
        }
        Err(LookupError::NotFound {
            query: query.to_owned(),
        })
    }
}

impl ScheduleStore for MemoryStore {
    fn fetch(&self, member: Uuid) -> Result<ScheduleMap, StoreError> {
        let window = self.window();
        let start = (member, window.start());
        let end = (member, window.end());
        Ok(self
            .rows
            .range(start..=end)
            .map(|(&(_, date), &status)| (date, status))
            .collect())
    }

    fn save(&mut self, member: Uuid, schedules: &ScheduleMap) -> Result<(), StoreError> {
        let window = self.window();
        for (date, status) in schedules.iter() {
            // Rows before today or past the window are skipped, not
            // errors; the rest of the request still goes through.
            if date < self.today || !window.contains(date) {
                debug!(%member, %date, "skipping out-of-window schedule row");
                continue;
            }
            self.rows.insert((member, date), status);
        }
        Ok(())
    }
}

// ───────────────────────────── Tests ─────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn member(number: &str) -> MemberRef {
        MemberRef::new(Uuid::new_v4(), format!("会員 {number}"), number)
    }

    fn store_with_member(today: Date, number: &str) -> (MemoryStore, MemberRef) {
        let mut store = MemoryStore::new(today);
        let m = member(number);
        store.add_member(m.clone());
        (store, m)
    }

    #[test]
    fn lookup_by_member_number() {
        let (store, m) = store_with_member(date(2026, 3, 15), "0042");
        assert_eq!(store.lookup("0042").unwrap(), m);
        assert_eq!(store.lookup(" 0042 ").unwrap(), m);
    }

    #[test]
    fn lookup_falls_back_to_uuid() {
        let (store, m) = store_with_member(date(2026, 3, 15), "0042");
        let found = store.lookup(&m.uuid.to_string()).unwrap();
        assert_eq!(found, m);
    }

    #[test]
    fn lookup_failures() {
        let (store, _) = store_with_member(date(2026, 3, 15), "0042");
        assert_eq!(store.lookup("  "), Err(LookupError::EmptyQuery));
        assert_eq!(
            store.lookup("9999"),
            Err(LookupError::NotFound {
                query: "9999".to_owned()
            })
        );
        // A well-formed UUID that matches nobody is still not found.
        let stranger = Uuid::new_v4().to_string();
        assert!(matches!(
            store.lookup(&stranger),
            Err(LookupError::NotFound { .. })
        ));
    }

    #[test]
    fn fetch_unknown_member_is_empty() {
        let store = MemoryStore::new(date(2026, 3, 15));
        let map = store.fetch(Uuid::new_v4()).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn save_then_fetch_roundtrip() {
        let today = date(2026, 3, 15);
        let (mut store, m) = store_with_member(today, "0042");
        let mut map = ScheduleMap::new();
        map.set(date(2026, 3, 20), DayStatus::Ok);
        map.set(date(2026, 4, 1), DayStatus::Ng);
        map.set(date(2026, 4, 2), DayStatus::Unset);
        store.save(m.uuid, &map).unwrap();

        let fetched = store.fetch(m.uuid).unwrap();
        assert_eq!(fetched, map);
    }

    #[test]
    fn save_skips_past_and_out_of_window_rows() {
        let today = date(2026, 3, 15);
        let (mut store, m) = store_with_member(today, "0042");
        let mut map = ScheduleMap::new();
        map.set(date(2026, 3, 10), DayStatus::Ok); // past, same month
        map.set(date(2026, 3, 15), DayStatus::Ok); // today is allowed
        map.set(date(2026, 7, 1), DayStatus::Ng); // beyond the window
        store.save(m.uuid, &map).unwrap();

        assert_eq!(store.stored_status(m.uuid, date(2026, 3, 10)), None);
        assert_eq!(
            store.stored_status(m.uuid, date(2026, 3, 15)),
            Some(DayStatus::Ok)
        );
        assert_eq!(store.stored_status(m.uuid, date(2026, 7, 1)), None);
    }

    #[test]
    fn fetch_keeps_past_rows_of_current_month() {
        // A row saved while it was still in the future stays visible
        // after the anchor has moved past it within the same month.
        let (mut store, m) = store_with_member(date(2026, 3, 10), "0042");
        let mut map = ScheduleMap::new();
        map.set(date(2026, 3, 12), DayStatus::Ok);
        store.save(m.uuid, &map).unwrap();

        store.set_today(date(2026, 3, 20));
        let fetched = store.fetch(m.uuid).unwrap();
        assert_eq!(fetched.status_of(date(2026, 3, 12)), DayStatus::Ok);
    }

    #[test]
    fn saves_do_not_leak_between_members() {
        let today = date(2026, 3, 15);
        let mut store = MemoryStore::new(today);
        let a = member("0001");
        let b = member("0002");
        store.add_member(a.clone());
        store.add_member(b.clone());

        let mut map = ScheduleMap::new();
        map.set(date(2026, 3, 20), DayStatus::Ok);
        store.save(a.uuid, &map).unwrap();

        assert!(store.fetch(b.uuid).unwrap().is_empty());
        assert_eq!(store.fetch(a.uuid).unwrap().len(), 1);
    }

    #[test]
    fn purge_drops_rows_before_cutoff() {
        let (mut store, m) = store_with_member(date(2026, 1, 10), "0042");
        let mut map = ScheduleMap::new();
        map.set(date(2026, 1, 15), DayStatus::Ok);
        map.set(date(2026, 2, 1), DayStatus::Ng);
        store.save(m.uuid, &map).unwrap();

        // Months later, only rows from 2026-02 onward survive the
        // cutoff (first of month minus two).
        store.set_today(date(2026, 4, 1));
        let removed = store.purge_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.stored_status(m.uuid, date(2026, 1, 15)), None);
        assert_eq!(
            store.stored_status(m.uuid, date(2026, 2, 1)),
            Some(DayStatus::Ng)
        );
    }
}

//! The date-keyed availability map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use kt_core::DayStatus;
use kt_time::Date;

/// One member's availability, keyed by date.
///
/// This is both the in-session model and the wire shape: it serializes
/// to a JSON object of `"YYYY-MM-DD"` keys with `"OK"`, `"NG"`, or
/// `null` values. Entries cycled back to unset stay in the map as
/// explicit `null`s so a bulk save clears the stored rows instead of
/// leaving them behind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleMap(BTreeMap<Date, DayStatus>);

impl ScheduleMap {
    /// An empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status recorded for `date`; absent entries read as unset.
    #[must_use]
    pub fn status_of(&self, date: Date) -> DayStatus {
        self.0.get(&date).copied().unwrap_or_default()
    }

    /// Records `status` for `date`, unset included.
    pub fn set(&mut self, date: Date, status: DayStatus) {
        self.0.insert(date, status);
    }

    /// Advances the status for `date` one step through the tap cycle and
    /// returns the new value.
    pub fn cycle(&mut self, date: Date) -> DayStatus {
        let next = self.status_of(date).cycled();
        self.0.insert(date, next);
        next
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of recorded entries, explicit unsets included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates (date, status) pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, DayStatus)> + '_ {
        self.0.iter().map(|(date, status)| (*date, *status))
    }
}

impl FromIterator<(Date, DayStatus)> for ScheduleMap {
    fn from_iter<I: IntoIterator<Item = (Date, DayStatus)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(Date, DayStatus)> for ScheduleMap {
    fn extend<I: IntoIterator<Item = (Date, DayStatus)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

// ───────────────────────────── Tests ─────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn absent_entries_read_as_unset() {
        let map = ScheduleMap::new();
        assert_eq!(map.status_of(date(2026, 3, 1)), DayStatus::Unset);
        assert!(map.is_empty());
    }

    #[test]
    fn cycle_walks_the_three_states() {
        let mut map = ScheduleMap::new();
        let d = date(2026, 3, 1);
        assert_eq!(map.cycle(d), DayStatus::Ok);
        assert_eq!(map.cycle(d), DayStatus::Ng);
        assert_eq!(map.cycle(d), DayStatus::Unset);
        // The cleared entry is kept as an explicit unset.
        assert_eq!(map.len(), 1);
        assert_eq!(map.status_of(d), DayStatus::Unset);
    }

    #[test]
    fn set_and_clear() {
        let mut map = ScheduleMap::new();
        map.set(date(2026, 3, 1), DayStatus::Ok);
        map.set(date(2026, 3, 2), DayStatus::Ng);
        assert_eq!(map.len(), 2);
        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn iteration_is_date_ordered() {
        let mut map = ScheduleMap::new();
        map.set(date(2026, 3, 5), DayStatus::Ok);
        map.set(date(2026, 3, 1), DayStatus::Ng);
        let dates: Vec<Date> = map.iter().map(|(d, _)| d).collect();
        assert_eq!(dates, vec![date(2026, 3, 1), date(2026, 3, 5)]);
    }

    #[test]
    fn wire_shape() {
        let mut map = ScheduleMap::new();
        map.set(date(2026, 3, 1), DayStatus::Ok);
        map.set(date(2026, 3, 2), DayStatus::Ng);
        map.set(date(2026, 3, 3), DayStatus::Unset);
        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(
            value,
            json!({
                "2026-03-01": "OK",
                "2026-03-02": "NG",
                "2026-03-03": null,
            })
        );
    }

    #[test]
    fn wire_roundtrip_keeps_explicit_unsets() {
        let text = r#"{"2026-03-01":"OK","2026-03-02":null}"#;
        let map: ScheduleMap = serde_json::from_str(text).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.status_of(date(2026, 3, 1)), DayStatus::Ok);
        assert_eq!(map.status_of(date(2026, 3, 2)), DayStatus::Unset);
    }

    #[test]
    fn unknown_statuses_read_as_unset() {
        let text = r#"{"2026-03-01":"ok","2026-03-02":"保留"}"#;
        let map: ScheduleMap = serde_json::from_str(text).unwrap();
        assert_eq!(map.status_of(date(2026, 3, 1)), DayStatus::Ok);
        assert_eq!(map.status_of(date(2026, 3, 2)), DayStatus::Unset);
    }
}
